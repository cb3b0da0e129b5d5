mod builtin;
mod field_def;
mod schema;
mod schema_type;
mod type_kind;

pub use builtin::is_builtin_scalar;
pub use field_def::FieldDef;
pub use schema::Schema;
pub(crate) use schema::leaf_type_name;
pub use schema_type::SchemaType;
pub use type_kind::TypeKind;

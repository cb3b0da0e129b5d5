mod code_model;
mod code_model_builder;
mod declaration;
mod enum_decl;
mod graphql_error_decls;
mod opaque_scalar_decl;
mod operation_descriptor;
mod struct_decl;
mod target_type;
mod type_mapper;

pub use code_model::CodeModel;
pub use code_model_builder::CodeModelBuilder;
pub use declaration::Declaration;
pub use enum_decl::EnumDecl;
pub(crate) use graphql_error_decls::GRAPHQL_ERROR_STRUCT_NAME;
pub(crate) use graphql_error_decls::graphql_error_decls;
pub use opaque_scalar_decl::OpaqueScalarDecl;
pub use operation_descriptor::OperationDescriptor;
pub use operation_descriptor::VariableParam;
pub use struct_decl::StructDecl;
pub use struct_decl::StructField;
pub use target_type::ScalarTarget;
pub use target_type::TargetType;
pub use type_mapper::map_type;

#[cfg(test)]
mod tests;

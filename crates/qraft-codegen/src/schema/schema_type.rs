use crate::schema::FieldDef;
use crate::schema::TypeKind;

/// A named type defined in the schema, reduced to the facts the generator
/// needs: its kind, its declared fields, its enum values, and its
/// interface/union relationships.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaType {
    pub(crate) name: String,
    pub(crate) kind: TypeKind,
    pub(crate) fields: Vec<FieldDef>,
    pub(crate) enum_values: Vec<String>,
    pub(crate) implements: Vec<String>,
    pub(crate) members: Vec<String>,
}
impl SchemaType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The type's declared fields, in schema declaration order. Empty for
    /// scalars, enums, and unions.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// All declared enum values, in declaration order. Empty for
    /// non-enum types.
    pub fn enum_values(&self) -> &[String] {
        &self.enum_values
    }

    /// Names of the interfaces this (object) type implements.
    pub fn implements(&self) -> &[String] {
        &self.implements
    }

    /// Member type names of this union, in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn is_abstract(&self) -> bool {
        self.kind.is_abstract()
    }
}

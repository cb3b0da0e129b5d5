use crate::ast;

/// A field declared on an object, interface, or input-object type.
///
/// Input-object fields and output fields are represented uniformly: the
/// generator only needs a name and a type annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    pub(crate) name: String,
    pub(crate) field_type: ast::schema::Type,
}
impl FieldDef {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn field_type(&self) -> &ast::schema::Type {
        &self.field_type
    }
}

/// A generated enum. Carries **all** of the schema enum's declared
/// values, never a selection-filtered subset -- an enum's value set is
/// part of its identity, not of its usage.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDecl {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumDecl {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// A generated opaque type standing in for a custom GraphQL scalar.
/// Custom scalars have no fixed shape, so the emitted type is an "any"
/// value the caller interprets.
#[derive(Clone, Debug, PartialEq)]
pub struct OpaqueScalarDecl {
    pub(crate) name: String,
}
impl OpaqueScalarDecl {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

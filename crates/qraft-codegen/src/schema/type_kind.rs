/// The category of a named type defined in a schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }

    /// Interfaces and unions have no concrete shape of their own; their
    /// selections are satisfied by a synthetic merged type.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }
}

use crate::model::EnumDecl;
use crate::model::OpaqueScalarDecl;
use crate::model::StructDecl;

/// One generated type declaration. The set of declaration kinds is
/// closed: every closure entry becomes exactly one of these.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Struct(StructDecl),
    Enum(EnumDecl),
    OpaqueScalar(OpaqueScalarDecl),
}
impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(decl) => decl.name(),
            Self::Enum(decl) => decl.name(),
            Self::OpaqueScalar(decl) => decl.name(),
        }
    }
}

/// The target-language primitive a built-in GraphQL scalar resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarTarget {
    Bool,
    Float,
    Id,
    Int,
    String,
}

/// A resolved target type, independent of any selection.
///
/// `Named` carries a schema type name, already decorated with the
/// `Fragment`/`Union` suffix when the underlying schema type is abstract.
/// Each list dimension of the GraphQL type adds one `List` wrapper;
/// non-null annotations are transparent (emitted optionality is the
/// options-mode post-pass, not a mapping concern).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TargetType {
    Scalar(ScalarTarget),
    Named(String),
    List(Box<TargetType>),
}
impl TargetType {
    /// Number of list dimensions wrapping the element type. `[[Int]]`
    /// has depth 2; a bare `Int` has depth 0.
    pub fn list_depth(&self) -> usize {
        match self {
            Self::List(inner) => 1 + inner.list_depth(),
            Self::Scalar(_) | Self::Named(_) => 0,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The innermost non-list type.
    pub fn leaf(&self) -> &TargetType {
        match self {
            Self::List(inner) => inner.leaf(),
            Self::Scalar(_) | Self::Named(_) => self,
        }
    }
}

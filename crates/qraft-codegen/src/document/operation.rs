use crate::ast;

/// Which kind of executable operation a client method is generated for.
///
/// Subscriptions are rejected while constructing a
/// [`QueryDocument`](crate::document::QueryDocument); the generated
/// client is strictly request/response.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
}
impl OperationKind {
    pub fn keyword(&self) -> &str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// A borrowed view of one named operation in a
/// [`QueryDocument`](crate::document::QueryDocument).
#[derive(Clone, Debug)]
pub struct Operation<'doc> {
    pub(crate) kind: OperationKind,
    pub(crate) name: &'doc str,
    pub(crate) variable_definitions: &'doc [ast::query::VariableDefinition],
    pub(crate) selection_set: &'doc ast::query::SelectionSet,
    pub(crate) source: &'doc str,
}
impl<'doc> Operation<'doc> {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &'doc str {
        self.name
    }

    /// The operation's declared variables, in declaration order.
    pub fn variable_definitions(&self) -> &'doc [ast::query::VariableDefinition] {
        self.variable_definitions
    }

    /// The root selection set.
    pub fn selection_set(&self) -> &'doc ast::query::SelectionSet {
        self.selection_set
    }

    /// The operation's raw source text (comments stripped), as embedded
    /// in the generated client and sent as the request body.
    pub fn source(&self) -> &'doc str {
        self.source
    }
}

use crate::ast;
use thiserror::Error;

/// All terminal failure modes of a generation run.
///
/// Generation is all-or-nothing: every variant aborts the run with no
/// partial output. Variants fall into two groups -- defects in the input
/// schema/query pair, and internal invariant violations that indicate a
/// bug in the resolver/builder rather than a user-fixable condition.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to parse GraphQL schema: {0}")]
    SchemaParse(ast::schema::ParseError),

    #[error("failed to parse GraphQL query document: {0}")]
    QueryParse(ast::query::ParseError),

    #[error("type `{type_name}` is defined more than once in the schema")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("`{type_name}` is not defined in the schema")]
    UndefinedType {
        type_name: String,
    },

    #[error("type `{type_name}` has no field named `{field_name}`")]
    UndefinedField {
        type_name: String,
        field_name: String,
    },

    #[error("fragment `{fragment_name}` is spread but never defined")]
    UndefinedFragment {
        fragment_name: String,
    },

    #[error(
        "the operation at line {line} has no name; every operation must be \
        named so it can become a client method"
    )]
    UnnamedOperation {
        line: usize,
    },

    #[error("subscriptions are not supported: `{operation_name}`")]
    UnsupportedSubscription {
        operation_name: String,
    },

    /// The type closure referenced a type that is absent from the schema
    /// index. The resolver only registers names it resolved against the
    /// schema, so reaching this is a bug in the resolver or the builder,
    /// not bad user input.
    #[error(
        "internal invariant violated: the type closure references \
        `{type_name}`, which is absent from the schema"
    )]
    ClosureTypeMissingFromSchema {
        type_name: String,
    },
}

use crate::model::ScalarTarget;
use crate::model::StructDecl;
use crate::model::StructField;
use crate::model::TargetType;

/// Name of the generated GraphQL error struct referenced by every
/// response envelope.
pub(crate) const GRAPHQL_ERROR_STRUCT_NAME: &str = "GraphQLError";

/// The fixed GraphQL-over-HTTP error shapes, emitted exactly once per
/// generation run and shared by all operations.
pub(crate) fn graphql_error_decls() -> Vec<StructDecl> {
    vec![
        StructDecl {
            name: GRAPHQL_ERROR_STRUCT_NAME.to_string(),
            fields: vec![
                StructField {
                    name: "message".to_string(),
                    serialization_key: "message".to_string(),
                    target_type: TargetType::Scalar(ScalarTarget::String),
                    optional: false,
                },
                StructField {
                    name: "locations".to_string(),
                    serialization_key: "locations".to_string(),
                    target_type: TargetType::List(Box::new(
                        TargetType::Named("GraphQLErrorLocation".to_string()),
                    )),
                    optional: false,
                },
                StructField {
                    name: "extensions".to_string(),
                    serialization_key: "extensions".to_string(),
                    target_type: TargetType::Named(
                        "GraphQLErrorExtensions".to_string(),
                    ),
                    optional: false,
                },
            ],
        },
        StructDecl {
            name: "GraphQLErrorLocation".to_string(),
            fields: vec![
                StructField {
                    name: "line".to_string(),
                    serialization_key: "line".to_string(),
                    target_type: TargetType::Scalar(ScalarTarget::Int),
                    optional: false,
                },
                StructField {
                    name: "column".to_string(),
                    serialization_key: "column".to_string(),
                    target_type: TargetType::Scalar(ScalarTarget::Int),
                    optional: false,
                },
            ],
        },
        StructDecl {
            name: "GraphQLErrorExtensions".to_string(),
            fields: vec![
                StructField {
                    name: "code".to_string(),
                    serialization_key: "code".to_string(),
                    target_type: TargetType::Scalar(ScalarTarget::String),
                    optional: false,
                },
            ],
        },
    ]
}

use serde::Serialize;

/// The GraphQL-over-HTTP POST request body: the operation source plus a
/// map of variable values.
///
/// See <https://graphql.org/learn/serving-over-http/#post-request>.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Map<String, serde_json::Value>,
}

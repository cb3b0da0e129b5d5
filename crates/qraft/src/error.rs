use thiserror::Error;

/// Failure modes of [`Client::execute`](crate::Client::execute).
///
/// These cover building and transporting the request only; GraphQL-level
/// errors arrive in the response body's `errors` list and are decoded by
/// the caller against the generated envelope types.
#[derive(Debug, Error)]
pub enum GraphQLCallError {
    #[error("preparation of GraphQL call failed: {reason}")]
    InvalidRequest {
        reason: String,
    },

    #[error("GraphQL call failed")]
    Transport(#[from] reqwest::Error),
}

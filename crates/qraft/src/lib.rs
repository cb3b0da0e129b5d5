//! Runtime GraphQL-over-HTTP client used by `qraft`-generated code.
//!
//! Generated clients hold a [`Client`] and delegate every operation to
//! [`Client::execute`], which posts a `{query, variables}` JSON body and
//! returns the raw [`reqwest::Response`] for the caller to decode
//! against the generated envelope types.

mod client;
mod error;
mod graphql_request;

pub use client::Client;
pub use error::GraphQLCallError;
pub use graphql_request::GraphQLRequest;

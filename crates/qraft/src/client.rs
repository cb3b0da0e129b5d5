use crate::GraphQLCallError;
use crate::GraphQLRequest;
use reqwest::header::HeaderMap;

/// A GraphQL-over-HTTP client bound to one endpoint.
///
/// The underlying [`reqwest::Client`] is supplied by the caller so
/// authentication, timeouts, and connection pooling stay fully
/// customizable.
#[derive(Clone, Debug)]
pub struct Client {
    endpoint: String,
    http_client: reqwest::Client,
}
impl Client {
    pub fn new(endpoint: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client,
        }
    }

    /// The full URL of the GraphQL endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Posts `query` with `variables` as a `{query, variables}` JSON
    /// body and returns the raw response for the caller to decode
    /// against its generated envelope type.
    ///
    /// Caller-supplied `headers` are applied first; `Content-Type` is
    /// always forced to `application/json`.
    pub async fn execute(
        &self,
        query: &str,
        variables: serde_json::Map<String, serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> Result<reqwest::Response, GraphQLCallError> {
        let compressed = compress_query(query);
        let request = GraphQLRequest {
            query: &compressed,
            variables,
        };
        let body = serde_json::to_vec(&request)
            .map_err(|err| GraphQLCallError::InvalidRequest {
                reason: err.to_string(),
            })?;

        let mut builder = self.http_client.post(self.endpoint.as_str());
        if let Some(headers) = headers {
            builder = builder.headers(headers);
        }
        let response = builder
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        Ok(response)
    }
}

/// Collapses all whitespace runs to single spaces so the operation text
/// travels compactly on the wire.
fn compress_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_query_collapses_whitespace() {
        let query = "query getRockets {\n    rockets {\n        name\n    }\n}";
        assert_eq!(
            compress_query(query),
            "query getRockets { rockets { name } }",
        );
    }

    #[test]
    fn compress_query_trims_ends() {
        assert_eq!(compress_query("  { id }  \n"), "{ id }");
    }

    #[test]
    fn request_body_serializes_query_and_variables() {
        let mut variables = serde_json::Map::new();
        variables.insert("limit".to_string(), serde_json::json!(10));
        let request = GraphQLRequest {
            query: "query getRockets { rockets { name } }",
            variables,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "query": "query getRockets { rockets { name } }",
                "variables": { "limit": 10 },
            }),
        );
    }

    #[test]
    fn client_keeps_endpoint() {
        let client = Client::new(
            "https://example.com/graphql",
            reqwest::Client::new(),
        );
        assert_eq!(client.endpoint(), "https://example.com/graphql");
    }

    #[tokio::test]
    async fn execute_surfaces_transport_errors() {
        // Nothing listens on port 9; the call must fail in transport,
        // not panic or hang.
        let client = Client::new(
            "http://127.0.0.1:9/graphql",
            reqwest::Client::new(),
        );
        let result = client
            .execute("query ping { id }", serde_json::Map::new(), None)
            .await;
        assert!(matches!(result, Err(GraphQLCallError::Transport(_))));
    }
}

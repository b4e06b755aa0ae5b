use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::error::{CmsError, Result};

const GRAPHQL_BASE: &str = "https://graphql.contentful.com/content/v1/spaces";

pub fn endpoint_url(space_id: &str, environment: &str) -> Result<Url> {
    let url = Url::parse(&format!(
        "{GRAPHQL_BASE}/{space_id}/environments/{environment}"
    ))?;
    Ok(url)
}

/// GraphQL client bound to one endpoint and one bearer token. Every
/// operation is a POST of the standard request envelope.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: Url,
    token: String,
    client: Client,
}

impl GraphqlClient {
    pub fn new(endpoint: Url, token: impl Into<String>) -> Result<Self> {
        if endpoint.scheme() != "https" {
            return Err(CmsError::InvalidEndpoint(format!(
                "{endpoint} must use https"
            )));
        }
        let client = Client::builder()
            .user_agent("roster")
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            endpoint,
            token: token.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Executes one operation and decodes the envelope's `data` into `T`.
    /// A non-empty `errors` array fails the whole call.
    pub fn execute<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&json!({ "query": query }))
            .send()?
            .error_for_status()?;

        let envelope: Envelope<T> = response.json()?;
        envelope.into_data()
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    #[serde(default)]
    message: String,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            let joined = self
                .errors
                .iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CmsError::GraphQl(joined));
        }
        self.data
            .ok_or_else(|| CmsError::Decode("response envelope has no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{endpoint_url, Envelope, GraphqlClient};
    use crate::error::CmsError;
    use url::Url;

    #[test]
    fn endpoint_embeds_space_and_environment() {
        let url = endpoint_url("space123", "master").expect("url");
        assert_eq!(
            url.as_str(),
            "https://graphql.contentful.com/content/v1/spaces/space123/environments/master"
        );
    }

    #[test]
    fn rejects_non_https_endpoints() {
        let url = Url::parse("http://graphql.contentful.com/content/v1/spaces/s").expect("url");
        let err = GraphqlClient::new(url, "token").unwrap_err();
        assert!(matches!(err, CmsError::InvalidEndpoint(_)));
    }

    #[test]
    fn envelope_with_errors_fails_the_call() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "unknown field"}, {"message": "bad space"}]}"#,
        )
        .expect("parse");
        let err = envelope.into_data().unwrap_err();
        match err {
            CmsError::GraphQl(message) => {
                assert_eq!(message, "unknown field; bad space");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn envelope_without_data_is_a_decode_error() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"data": null}"#).expect("parse");
        let err = envelope.into_data().unwrap_err();
        assert!(matches!(err, CmsError::Decode(_)));
    }

    #[test]
    fn envelope_passes_data_through() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"data": {"ok": true}}"#).expect("parse");
        let data = envelope.into_data().expect("data");
        assert_eq!(data["ok"], true);
    }
}

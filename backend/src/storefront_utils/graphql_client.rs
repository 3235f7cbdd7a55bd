use serde::{Deserialize, Serialize, de::DeserializeOwned};
use anyhow::Context;
use tracing::{debug, info, warn};

use crate::storefront_utils::config::StorefrontConfig;

pub const STOREFRONT_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Read-only client for the storefront GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

pub fn get_storefront_client() -> StorefrontClient {
    StorefrontClient::new(&StorefrontConfig::from_env())
}

impl StorefrontClient {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.graphql_endpoint(),
            access_token: config.access_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one query and returns its `data`. HTTP failures, GraphQL `errors` and a missing
    /// `data` field are all errors.
    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> anyhow::Result<T> {
        debug!("STOREFRONT QUERY {}: {}", operation, variables);
        let t0 = std::time::Instant::now();
        let response = self
            .http
            .post(&self.endpoint)
            .header(STOREFRONT_TOKEN_HEADER, &self.access_token)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .with_context(|| format!("Storefront request {} to {} failed", operation, self.endpoint))?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            warn!("STOREFRONT ERROR {}: {}", operation, status);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let dt_ms = t0.elapsed().as_millis() as u32;
        info!("STOREFRONT RESPONSE {}: len = {} ({}ms)", operation, response_txt.len(), dt_ms);

        let response: GraphqlResponse<T> = serde_json::from_str(&response_txt)
            .with_context(|| format!("Malformed storefront response for {}", operation))?;
        if !response.errors.is_empty() {
            let messages = response.errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ");
            warn!("STOREFRONT GRAPHQL ERRORS {}: {}", operation, messages);
            anyhow::bail!("GraphQL errors in {}: {}", operation, messages);
        }
        response.data.with_context(|| format!("Storefront response for {} has no data", operation))
    }
}

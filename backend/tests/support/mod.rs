use backend::storefront_utils::{config::StorefrontConfig, graphql_client::StorefrontClient};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-storefront-token";
pub const GRAPHQL_PATH: &str = "/api/2024-10/graphql.json";

pub fn client_for(server: &MockServer) -> StorefrontClient {
    StorefrontClient::new(&StorefrontConfig {
        store_domain: server.uri(),
        access_token: TEST_TOKEN.to_string(),
        api_version: "2024-10".to_string(),
    })
}

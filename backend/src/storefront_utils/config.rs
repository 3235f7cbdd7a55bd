//! Storefront connection settings read from the environment.

pub const DEFAULT_API_VERSION: &str = "2024-10";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self {
            store_domain: std::env::var("PUBLIC_STORE_DOMAIN").unwrap_or("http://127.0.0.1:8090".to_string()),
            access_token: std::env::var("PUBLIC_STOREFRONT_API_TOKEN").unwrap_or_default(),
            api_version: std::env::var("STOREFRONT_API_VERSION").unwrap_or(DEFAULT_API_VERSION.to_string()),
        }
    }

    /// `https://<domain>/api/<version>/graphql.json`; a bare domain is assumed to be https.
    pub fn graphql_endpoint(&self) -> String {
        let domain = self.store_domain.trim().trim_end_matches('/');
        let domain = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };
        format!("{}/api/{}/graphql.json", domain, self.api_version)
    }
}

/// The GraphiQL explorer is served in debug builds, or when `STOREFRONT_GRAPHIQL=1`.
pub fn graphiql_enabled() -> bool {
    cfg!(debug_assertions) || std::env::var("STOREFRONT_GRAPHIQL").map(|v| v == "1").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(domain: &str) -> StorefrontConfig {
        StorefrontConfig {
            store_domain: domain.to_string(),
            access_token: "token".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    #[test]
    fn bare_domains_get_https() {
        assert_eq!(config("shop.example.com").graphql_endpoint(), "https://shop.example.com/api/2024-10/graphql.json");
    }

    #[test]
    fn explicit_scheme_and_trailing_slash() {
        assert_eq!(config("http://127.0.0.1:9000/").graphql_endpoint(), "http://127.0.0.1:9000/api/2024-10/graphql.json");
    }
}

use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};
use tracing::info;

use crate::storefront_utils::config::{StorefrontConfig, graphiql_enabled};

/// Development-only GraphiQL explorer bound to the configured storefront endpoint.
pub async fn graphiql() -> Response {
    render_graphiql(graphiql_enabled(), &StorefrontConfig::from_env())
}

pub fn render_graphiql(enabled: bool, config: &StorefrontConfig) -> Response {
    if !enabled {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }
    let endpoint = config.graphql_endpoint();
    info!("Serving GraphiQL for {}", endpoint);
    Html(graphiql_html(&endpoint, &config.access_token)).into_response()
}

/// Endpoint and token are embedded as JSON string literals, never spliced in raw.
pub fn graphiql_html(endpoint: &str, access_token: &str) -> String {
    let endpoint = serde_json::Value::String(endpoint.to_string()).to_string().replace("</", "<\\/");
    let access_token = serde_json::Value::String(access_token.to_string()).to_string().replace("</", "<\\/");
    format!(r#"<!DOCTYPE html>
<html>
  <head>
    <title>GraphiQL</title>
    <link rel="stylesheet" href="https://unpkg.com/graphiql/graphiql.min.css" />
  </head>
  <body style="margin: 0;">
    <div id="graphiql" style="height: 100vh;"></div>
    <script crossorigin src="https://unpkg.com/react@17/umd/react.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom@17/umd/react-dom.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/graphiql/graphiql.min.js"></script>
    <script>
      const fetcher = GraphiQL.createFetcher({{
        url: {endpoint},
        headers: {{
          'X-Shopify-Storefront-Access-Token': {access_token},
        }},
      }});
      ReactDOM.render(
        React.createElement(GraphiQL, {{ fetcher: fetcher }}),
        document.getElementById('graphiql'),
      );
    </script>
  </body>
</html>
"#)
}

//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .route("/graphiql", axum::routing::get(backend::server_extra::graphiql::graphiql))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let started = std::time::Instant::now();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    dioxus::logger::tracing::debug!("{} {} in {:?}", path, res.status(), started.elapsed());
                    res
                },
            )))
    });
}

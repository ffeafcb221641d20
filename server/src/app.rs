use axum::{http::header, response::IntoResponse, Router};
use tower_http::trace::TraceLayer;

pub const HELLO_BODY: &str = "Hello World\n";

/// Every method on every path falls through to the same plaintext answer.
pub fn router() -> Router {
    Router::new()
        .fallback(hello)
        .layer(TraceLayer::new_for_http())
}

async fn hello() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], HELLO_BODY)
}

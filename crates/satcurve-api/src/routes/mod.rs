//! Route handlers.

pub mod charts;
pub mod health;

use axum::response::Html;

/// The embedded single-page UI.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

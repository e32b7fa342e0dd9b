use crate::error::ApiError;
use crate::state::StaticAssets;
use axum::extract::State;
use axum::response::Html;

/// Serves `index.html` from the static directory, re-read on every request.
pub async fn index(State(assets): State<StaticAssets>) -> Result<Html<String>, ApiError> {
    let page = tokio::fs::read_to_string(assets.index_path()).await?;
    Ok(Html(page))
}

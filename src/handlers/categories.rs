use crate::error::AppError;
use crate::response;
use crate::service::categories;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = categories::list(state.db.as_ref()).await?;
    Ok(response::ok("categories", rows)?)
}

use crate::error::AppError;
use crate::response;
use crate::service::users;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = users::list(state.db.as_ref()).await?;
    Ok(response::ok("users", rows)?)
}

use crate::error::AppError;
use crate::model::{map_rows, User};
use crate::service::Executor;
use crate::sql::select_users;

pub async fn list(db: &dyn Executor) -> Result<Vec<User>, AppError> {
    map_rows(db.fetch_all(&select_users()).await?)
}

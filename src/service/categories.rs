use crate::error::AppError;
use crate::model::{map_rows, Category};
use crate::service::Executor;
use crate::sql::select_categories;

pub async fn list(db: &dyn Executor) -> Result<Vec<Category>, AppError> {
    map_rows(db.fetch_all(&select_categories()).await?)
}

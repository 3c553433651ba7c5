//! Board-game reviews API: categories, reviews, comments and users over PostgreSQL.

pub mod classify;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use classify::{classify, Classified};
pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, app_with_body_limit, common_routes};
pub use service::Executor;
pub use state::AppState;

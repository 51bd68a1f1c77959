//! Explicit route tables, built at startup.

mod account;
mod common;

pub use account::account_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;

/// Full application router: health/info plus the /accounts tree.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(account_routes(state))
}

//! Account service: CRUD REST microservice over a single Account resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use model::{Account, NewAccount};
pub use routes::{account_routes, app_router, common_routes};
pub use state::AppState;
pub use store::{AccountStore, MemoryAccountStore, PgAccountStore};

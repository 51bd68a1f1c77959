//! Account persistence behind a store trait, injected into handler state.

mod memory;
mod postgres;

use crate::error::AppError;
use crate::model::{Account, NewAccount};
use async_trait::async_trait;

pub use memory::MemoryAccountStore;
pub use postgres::{ensure_accounts_table, PgAccountStore};

/// Persistence interface for Accounts. Handlers hold an `Arc<dyn AccountStore>`
/// supplied at startup; they never reach for a global connection.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch one record by id, or None if it does not exist.
    async fn find(&self, id: i64) -> Result<Option<Account>, AppError>;

    /// Fetch every record in id order. No pagination.
    async fn all(&self) -> Result<Vec<Account>, AppError>;

    /// Insert a new record. The store assigns the id and defaults date_joined
    /// to the current date when the payload omits it.
    async fn create(&self, new: NewAccount) -> Result<Account, AppError>;

    /// Persist the full record identified by `account.id`.
    async fn update(&self, account: &Account) -> Result<Account, AppError>;

    /// Remove the record by id. Removing an absent id is not an error at this
    /// layer; handlers resolve existence first.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

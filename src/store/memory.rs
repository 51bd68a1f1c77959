//! In-process account store. Backs the HTTP tests and local runs without a
//! database; same trait surface as the PostgreSQL store.

use crate::error::AppError;
use crate::model::{Account, NewAccount};
use crate::store::AccountStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryAccountStore {
    records: RwLock<BTreeMap<i64, Account>>,
    next_id: AtomicI64,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find(&self, id: i64) -> Result<Option<Account>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))?;
        Ok(records.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))?;
        Ok(records.values().cloned().collect())
    }

    async fn create(&self, new: NewAccount) -> Result<Account, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let account = Account {
            id,
            name: new.name,
            email: new.email,
            address: new.address,
            phone_number: new.phone_number,
            date_joined: new
                .date_joined
                .unwrap_or_else(|| chrono::Utc::now().date_naive()),
        };
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))?;
        records.insert(id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))?;
        if !records.contains_key(&account.id) {
            return Err(AppError::Db(sqlx::Error::RowNotFound));
        }
        records.insert(account.id, account.clone());
        Ok(account.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))?;
        records.remove(&id);
        Ok(())
    }
}

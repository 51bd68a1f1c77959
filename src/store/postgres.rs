//! PostgreSQL-backed account store.

use crate::error::AppError;
use crate::model::{Account, NewAccount};
use crate::store::AccountStore;
use async_trait::async_trait;
use sqlx::PgPool;

/// Idempotent DDL for the accounts table. Call before serving.
pub async fn ensure_accounts_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT,
            address TEXT,
            phone_number TEXT,
            date_joined DATE NOT NULL DEFAULT CURRENT_DATE
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find(&self, id: i64) -> Result<Option<Account>, AppError> {
        tracing::debug!(id, "select account");
        let row = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number, date_joined FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn all(&self) -> Result<Vec<Account>, AppError> {
        tracing::debug!("select all accounts");
        let rows = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number, date_joined FROM accounts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, new: NewAccount) -> Result<Account, AppError> {
        tracing::debug!(name = %new.name, "insert account");
        let row = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, address, phone_number, date_joined)
            VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE))
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.address)
        .bind(&new.phone_number)
        .bind(new.date_joined)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        tracing::debug!(id = account.id, "update account");
        let row = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = $2, email = $3, address = $4, phone_number = $5, date_joined = $6
            WHERE id = $1
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete account");
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

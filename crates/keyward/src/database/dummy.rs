use std::collections::HashMap;
use std::sync::Arc;

use async_std::sync::RwLock;

use crate::{models::Account, Error, Result, Success};

use super::definition::AbstractDatabase;

/// In-memory account store
///
/// Suitable for tests and single-process embedding; the write lock
/// gives each call the per-row atomicity the engine expects.
#[derive(Clone, Default)]
pub struct DummyDb {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

#[async_trait]
impl AbstractDatabase for DummyDb {
    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<Account> {
        self.accounts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(Error::UnknownUser)
    }

    /// Find account by email
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.email == email)
            .cloned())
    }

    /// Insert new account, enforcing email uniqueness
    async fn insert_account(&self, account: &Account) -> Success {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|existing| existing.email == account.email)
        {
            return Err(Error::AccountExists);
        }

        accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    /// Save account
    async fn save_account(&self, account: &Account) -> Success {
        self.accounts
            .write()
            .await
            .insert(account.id.clone(), account.clone());

        Ok(())
    }
}

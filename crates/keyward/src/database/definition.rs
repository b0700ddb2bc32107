use crate::{models::Account, Result, Success};

/// Persistence contract the engine depends on
///
/// Every call is atomic per account row; flows read, compute and write
/// back a whole account in a single logical transaction.
#[async_trait]
pub trait AbstractDatabase: std::marker::Sync {
    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<Account>;

    /// Find account by email
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Insert new account, enforcing email uniqueness
    async fn insert_account(&self, account: &Account) -> Success;

    /// Save account
    async fn save_account(&self, account: &Account) -> Success;
}

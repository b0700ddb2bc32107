//! Fetch the account behind a session token
//! GET /auth/me
use crate::models::AccountInfo;
use crate::{Keyward, Result};

/// # Fetch Account
///
/// Resolve the session token and load the projection fresh from the
/// store rather than from the token claims, so later account changes
/// show up without re-issuing the token.
pub async fn fetch_account(keyward: &Keyward, token: &str) -> Result<AccountInfo> {
    let account_id = keyward.verify_session(token)?;

    let account = keyward.database.find_account(&account_id).await?;

    Ok(account.into())
}

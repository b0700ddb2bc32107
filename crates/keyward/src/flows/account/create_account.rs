//! Create a new account
//! POST /auth/register
use crate::models::{Account, AccountInfo};
use crate::{Error, Keyward, Result};

/// # Account Data
#[derive(Debug, Serialize, Deserialize)]
pub struct DataCreateAccount {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// # New Account
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseCreateAccount {
    /// Public projection of the new account
    pub user: AccountInfo,
    /// Session token, issued before verification completes
    pub token: String,
}

/// # Create Account
///
/// Register a new account, dispatch its verification code and log the
/// user straight in. Verification gates feature access, not login.
pub async fn create_account(
    keyward: &Keyward,
    data: DataCreateAccount,
) -> Result<ResponseCreateAccount> {
    if data.name.is_empty() {
        return Err(Error::IncorrectData { with: "name" });
    }

    if data.email.is_empty() {
        return Err(Error::IncorrectData { with: "email" });
    }

    if data.password.is_empty() {
        return Err(Error::IncorrectData { with: "password" });
    }

    // Create account and start email verification
    let account = Account::new(keyward, data.name, data.email, data.password).await?;

    // The session outlives verification on purpose
    let token = keyward.issue_session(&account.id);

    Ok(ResponseCreateAccount {
        user: account.into(),
        token,
    })
}

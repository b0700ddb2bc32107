//! Login to an account
//! POST /auth/login
use crate::models::AccountInfo;
use crate::{Error, Keyward, Result};

/// # Login Data
#[derive(Debug, Serialize, Deserialize)]
pub struct DataLogin {
    /// Email
    pub email: String,
    /// Password
    pub password: String,
}

/// # Session
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseLogin {
    /// Public projection of the account
    pub user: AccountInfo,
    /// Session token
    pub token: String,
}

/// # Login
///
/// Validate the password and mint a session token. Unknown address and
/// wrong password produce the same error, to keep account enumeration
/// out of this path. Unverified accounts may log in; verification
/// gates feature access elsewhere.
pub async fn login(keyward: &Keyward, data: DataLogin) -> Result<ResponseLogin> {
    if data.email.is_empty() {
        return Err(Error::IncorrectData { with: "email" });
    }

    if data.password.is_empty() {
        return Err(Error::IncorrectData { with: "password" });
    }

    let account = keyward
        .database
        .find_account_by_email(&data.email)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    account.verify_password(&data.password)?;

    let token = keyward.issue_session(&account.id);

    Ok(ResponseLogin {
        user: account.into(),
        token,
    })
}

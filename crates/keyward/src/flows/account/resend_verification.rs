//! Resend the account verification code
//! POST /auth/resend
use crate::{Error, Keyward, Success};

/// # Resend Information
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResendVerification {
    /// Email associated with the account
    pub email: String,
}

/// # Resend Verification
///
/// Issue a fresh verification code, invalidating any outstanding one,
/// and dispatch it again. No server-side cooldown is enforced. Already
/// verified accounts are left untouched.
pub async fn resend_verification(keyward: &Keyward, data: DataResendVerification) -> Success {
    if data.email.is_empty() {
        return Err(Error::IncorrectData { with: "email" });
    }

    let mut account = keyward
        .database
        .find_account_by_email(&data.email)
        .await?
        .ok_or(Error::UnknownUser)?;

    if account.verified {
        return Ok(());
    }

    account.start_email_verification(keyward).await
}

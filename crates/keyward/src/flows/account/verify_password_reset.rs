//! Trade a reset code for a short-lived reset grant
//! POST /auth/reset/verify
use crate::models::OtpPurpose;
use crate::{Error, Keyward, Result};

/// # Reset Verification Data
#[derive(Debug, Serialize, Deserialize)]
pub struct DataVerifyPasswordReset {
    /// Email associated with the account
    pub email: String,
    /// Submitted one-time code
    pub code: String,
}

/// # Reset Grant
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseVerifyPasswordReset {
    /// Grant to present when confirming the password change
    pub reset_token: String,
}

/// # Verify Password Reset
///
/// Check the reset code and mint a grant scoped to the account's
/// email. The reset slot stays in place until the change is confirmed,
/// so the same code can mint further grants inside its window.
pub async fn verify_password_reset(
    keyward: &Keyward,
    data: DataVerifyPasswordReset,
) -> Result<ResponseVerifyPasswordReset> {
    if data.email.is_empty() {
        return Err(Error::IncorrectData { with: "email" });
    }

    if data.code.is_empty() {
        return Err(Error::IncorrectData { with: "code" });
    }

    let account = keyward
        .database
        .find_account_by_email(&data.email)
        .await?
        .ok_or(Error::UnknownUser)?;

    account.check_challenge(OtpPurpose::Reset, &data.code)?;

    Ok(ResponseVerifyPasswordReset {
        reset_token: keyward.issue_reset_grant(&account.email),
    })
}

//! Request a password reset code
//! POST /auth/reset/request
use crate::{Error, Keyward, Success};

/// # Reset Information
#[derive(Debug, Serialize, Deserialize)]
pub struct DataSendPasswordReset {
    /// Email associated with the account
    pub email: String,
}

/// # Send Password Reset
///
/// Issue a reset code for the account and dispatch it by email,
/// overwriting any outstanding reset challenge.
///
/// An unknown address reports `UnknownUser`, so this operation leaks
/// account existence to the caller; the routing layer should weigh
/// that before exposing it unthrottled.
pub async fn send_password_reset(keyward: &Keyward, data: DataSendPasswordReset) -> Success {
    if data.email.is_empty() {
        return Err(Error::IncorrectData { with: "email" });
    }

    let mut account = keyward
        .database
        .find_account_by_email(&data.email)
        .await?
        .ok_or(Error::UnknownUser)?;

    account.start_password_reset(keyward).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let keyward = for_test();
        bootstrap_account(&keyward, "ann@x.com").await;

        send_password_reset(
            &keyward,
            DataSendPasswordReset {
                email: "ann@x.com".into(),
            },
        )
        .await
        .unwrap();

        let code = assert_email_captured(&keyward, "ann@x.com");

        let account = keyward
            .database
            .find_account_by_email("ann@x.com")
            .await
            .unwrap()
            .unwrap();

        account.check_challenge(OtpPurpose::Reset, &code).unwrap();

        // The verification channel is untouched by a reset request
        assert!(account.verification.is_some());
    }

    #[async_std::test]
    async fn fail_unknown_user() {
        let keyward = for_test();

        let res = send_password_reset(
            &keyward,
            DataSendPasswordReset {
                email: "nobody@x.com".into(),
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::UnknownUser);
    }
}

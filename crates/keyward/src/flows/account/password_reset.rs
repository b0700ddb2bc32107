//! Confirm a password reset
//! POST /auth/reset/confirm
use crate::util::hash_secret;
use crate::{Error, Keyward, Success};

/// # Password Reset Data
#[derive(Debug, Serialize, Deserialize)]
pub struct DataPasswordReset {
    /// Email associated with the account
    pub email: String,
    /// New password
    pub password: String,
    /// Grant minted by the reset verification step
    pub reset_token: String,
}

/// # Password Reset
///
/// Consume a reset grant and change the password. The grant must be
/// bound to this exact email; this is the only operation that mutates
/// a password hash, and it clears the reset challenge as it does so.
pub async fn password_reset(keyward: &Keyward, data: DataPasswordReset) -> Success {
    if data.email.is_empty() {
        return Err(Error::IncorrectData { with: "email" });
    }

    if data.password.is_empty() {
        return Err(Error::IncorrectData { with: "password" });
    }

    let mut account = keyward
        .database
        .find_account_by_email(&data.email)
        .await?
        .ok_or(Error::UnknownUser)?;

    keyward.verify_reset_grant(&data.reset_token, &account.email)?;

    // Update the account
    account.password = hash_secret(&data.password)?;
    account.password_reset = None;

    account.save(keyward).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::account::send_password_reset::*;
    use crate::flows::account::verify_password_reset::*;
    use crate::flows::session::login::*;
    use crate::test::*;

    #[async_std::test]
    async fn success_end_to_end() {
        let keyward = for_test();
        bootstrap_account(&keyward, "ann@x.com").await;

        // Request a reset and capture the emailed code
        send_password_reset(
            &keyward,
            DataSendPasswordReset {
                email: "ann@x.com".into(),
            },
        )
        .await
        .unwrap();

        let code = assert_email_captured(&keyward, "ann@x.com");

        // Trade the code for a grant
        let grant = verify_password_reset(
            &keyward,
            DataVerifyPasswordReset {
                email: "ann@x.com".into(),
                code: code.clone(),
            },
        )
        .await
        .unwrap()
        .reset_token;

        // Consume the grant
        password_reset(
            &keyward,
            DataPasswordReset {
                email: "ann@x.com".into(),
                password: "newpw1".into(),
                reset_token: grant,
            },
        )
        .await
        .unwrap();

        // New password logs in, the old one does not
        login(
            &keyward,
            DataLogin {
                email: "ann@x.com".into(),
                password: "newpw1".into(),
            },
        )
        .await
        .unwrap();

        let res = login(
            &keyward,
            DataLogin {
                email: "ann@x.com".into(),
                password: "password_insecure".into(),
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::InvalidCredentials);

        // Confirmation spent the challenge
        let account = keyward
            .database
            .find_account_by_email("ann@x.com")
            .await
            .unwrap()
            .unwrap();

        assert!(account.password_reset.is_none());
        assert_eq!(
            account
                .check_challenge(OtpPurpose::Reset, &code)
                .unwrap_err(),
            Error::CodeNotIssued
        );
    }

    #[async_std::test]
    async fn fail_grant_for_another_email() {
        let keyward = for_test();
        bootstrap_account(&keyward, "a@x.com").await;
        bootstrap_account(&keyward, "b@x.com").await;

        let grant = keyward.issue_reset_grant("a@x.com");

        let res = password_reset(
            &keyward,
            DataPasswordReset {
                email: "b@x.com".into(),
                password: "newpw1".into(),
                reset_token: grant,
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::EmailMismatch);
    }

    #[async_std::test]
    async fn fail_invalid_grant() {
        let keyward = for_test();
        bootstrap_account(&keyward, "ann@x.com").await;

        let res = password_reset(
            &keyward,
            DataPasswordReset {
                email: "ann@x.com".into(),
                password: "newpw1".into(),
                reset_token: "garbage".into(),
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::InvalidToken);
    }

    #[async_std::test]
    async fn fail_unknown_user() {
        let keyward = for_test();

        let res = password_reset(
            &keyward,
            DataPasswordReset {
                email: "nobody@x.com".into(),
                password: "newpw1".into(),
                reset_token: "anything".into(),
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::UnknownUser);
    }
}

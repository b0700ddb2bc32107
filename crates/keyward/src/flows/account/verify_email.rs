//! Verify an email address with a one-time code
//! POST /auth/verify
use iso8601_timestamp::Timestamp;

use crate::models::{AccountInfo, OtpPurpose};
use crate::{Error, Keyward, Result};

/// # Verification Data
#[derive(Debug, Serialize, Deserialize)]
pub struct DataVerifyEmail {
    /// Email associated with the account
    pub email: String,
    /// Submitted one-time code
    pub code: String,
}

/// # Verify Email
///
/// Prove control of the email address. Idempotent on success: an
/// already verified account returns its projection without mutation,
/// so a duplicate submission from a duplicate email is harmless.
pub async fn verify_email(keyward: &Keyward, data: DataVerifyEmail) -> Result<AccountInfo> {
    if data.email.is_empty() {
        return Err(Error::IncorrectData { with: "email" });
    }

    if data.code.is_empty() {
        return Err(Error::IncorrectData { with: "code" });
    }

    let mut account = keyward
        .database
        .find_account_by_email(&data.email)
        .await?
        .ok_or(Error::UnknownUser)?;

    if account.verified {
        return Ok(account.into());
    }

    account.check_challenge(OtpPurpose::Verification, &data.code)?;

    // The code is spent; clear the slot before marking verified
    account.verification = None;
    account.verified = true;
    account.verified_at = Some(Timestamp::now_utc());

    account.save(keyward).await?;

    Ok(account.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::account::create_account::*;
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let keyward = for_test();

        create_account(
            &keyward,
            DataCreateAccount {
                name: "Ann".into(),
                email: "ann@x.com".into(),
                password: "pw123456".into(),
            },
        )
        .await
        .unwrap();

        let code = assert_email_captured(&keyward, "ann@x.com");

        let info = verify_email(
            &keyward,
            DataVerifyEmail {
                email: "ann@x.com".into(),
                code,
            },
        )
        .await
        .unwrap();

        assert!(info.verified);

        let account = keyward.database.find_account(&info.id).await.unwrap();
        assert!(account.verified);
        assert!(account.verified_at.is_some());
        assert!(account.verification.is_none());
    }

    #[async_std::test]
    async fn already_verified_is_idempotent() {
        let keyward = for_test();
        let mut account = bootstrap_account(&keyward, "ann@x.com").await;

        account.verified = true;
        account.verification = None;
        account.save(&keyward).await.unwrap();

        let info = verify_email(
            &keyward,
            DataVerifyEmail {
                email: "ann@x.com".into(),
                code: "000000".into(),
            },
        )
        .await
        .unwrap();

        assert!(info.verified);
    }

    #[async_std::test]
    async fn spent_code_no_longer_checks() {
        let keyward = for_test();
        bootstrap_account(&keyward, "ann@x.com").await;

        let mut account = keyward
            .database
            .find_account_by_email("ann@x.com")
            .await
            .unwrap()
            .unwrap();

        let code = account
            .issue_challenge(&keyward, OtpPurpose::Verification)
            .await
            .unwrap();

        verify_email(
            &keyward,
            DataVerifyEmail {
                email: "ann@x.com".into(),
                code: code.clone(),
            },
        )
        .await
        .unwrap();

        // The slot is cleared; a direct re-check of the same code now
        // reports that nothing is outstanding
        let account = keyward
            .database
            .find_account_by_email("ann@x.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            account
                .check_challenge(OtpPurpose::Verification, &code)
                .unwrap_err(),
            Error::CodeNotIssued
        );
    }

    #[async_std::test]
    async fn fail_wrong_code() {
        let keyward = for_test();
        bootstrap_account(&keyward, "ann@x.com").await;

        let res = verify_email(
            &keyward,
            DataVerifyEmail {
                email: "ann@x.com".into(),
                code: "000000".into(),
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::CodeMismatch);
    }

    #[async_std::test]
    async fn fail_expired_code() {
        let keyward = for_test();
        let mut account = bootstrap_account(&keyward, "ann@x.com").await;

        let code = account
            .issue_challenge(&keyward, OtpPurpose::Verification)
            .await
            .unwrap();

        account
            .verification
            .as_mut()
            .expect("a challenge")
            .expiry = expiry_after_seconds(-60);
        account.save(&keyward).await.unwrap();

        let res = verify_email(
            &keyward,
            DataVerifyEmail {
                email: "ann@x.com".into(),
                code,
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::CodeExpired);
    }

    #[async_std::test]
    async fn fail_unknown_user() {
        let keyward = for_test();

        let res = verify_email(
            &keyward,
            DataVerifyEmail {
                email: "nobody@x.com".into(),
                code: "123456".into(),
            },
        )
        .await;

        assert_eq!(res.unwrap_err(), Error::UnknownUser);
    }
}

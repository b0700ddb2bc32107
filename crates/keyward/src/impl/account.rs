use crate::{
    models::{Account, OtpPurpose},
    util::{hash_secret, verify_secret},
    Error, Keyward, Result, Success,
};

impl Account {
    /// Create a new account
    ///
    /// Inserts the account unverified and immediately starts the email
    /// verification challenge.
    pub async fn new(
        keyward: &Keyward,
        name: String,
        email: String,
        plaintext_password: String,
    ) -> Result<Account> {
        // Hash the user's password
        let password = hash_secret(&plaintext_password)?;

        // Refuse to create a second account for the same address
        if keyward
            .database
            .find_account_by_email(&email)
            .await?
            .is_some()
        {
            return Err(Error::AccountExists);
        }

        let mut account = Account {
            id: ulid::Ulid::new().to_string(),

            name,
            email,
            password,

            verified: false,
            verified_at: None,
            verification: None,
            password_reset: None,
        };

        keyward.database.insert_account(&account).await?;

        // Issue and dispatch the verification code
        account.start_email_verification(keyward).await?;

        Ok(account)
    }

    /// Issue a fresh verification code and dispatch it by email
    ///
    /// Overwrites any outstanding verification challenge; only the
    /// newest code is ever valid.
    pub async fn start_email_verification(&mut self, keyward: &Keyward) -> Success {
        let code = self
            .issue_challenge(keyward, OtpPurpose::Verification)
            .await?;

        // The code is durably stored at this point; a delivery failure
        // is logged and the user can ask for a resend.
        if let Err(err) = keyward
            .config
            .templates
            .verify
            .render(&self.email, json!({ "name": self.name, "code": code }))
            .and_then(|mail| keyward.mailer.send(mail))
        {
            error!("failed to dispatch verification email: {:?}", err);
        }

        Ok(())
    }

    /// Issue a fresh password reset code and dispatch it by email
    pub async fn start_password_reset(&mut self, keyward: &Keyward) -> Success {
        let code = self.issue_challenge(keyward, OtpPurpose::Reset).await?;

        if let Err(err) = keyward
            .config
            .templates
            .reset
            .render(&self.email, json!({ "name": self.name, "code": code }))
            .and_then(|mail| keyward.mailer.send(mail))
        {
            error!("failed to dispatch password reset email: {:?}", err);
        }

        Ok(())
    }

    /// Verify a user's password is correct
    pub fn verify_password(&self, plaintext_password: &str) -> Success {
        // A malformed stored digest reads as a wrong password here,
        // which keeps unknown-user and wrong-password indistinguishable.
        if verify_secret(plaintext_password, &self.password) {
            Ok(())
        } else {
            Err(Error::InvalidCredentials)
        }
    }

    /// Save model
    pub async fn save(&self, keyward: &Keyward) -> Success {
        keyward.database.save_account(self).await
    }
}

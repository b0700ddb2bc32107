use crate::{
    models::{Account, OtpChallenge, OtpPurpose},
    util::{expiry_after_seconds, generate_otp, hash_secret, is_expired, verify_secret},
    Error, Keyward, Result, Success,
};

impl Account {
    /// Issue a one-time code for `purpose`
    ///
    /// Stores the hashed code and its expiry in the purpose's slot,
    /// overwriting any outstanding challenge, and returns the plaintext
    /// for out-of-band delivery. The plaintext is never persisted.
    pub async fn issue_challenge(
        &mut self,
        keyward: &Keyward,
        purpose: OtpPurpose,
    ) -> Result<String> {
        let code = generate_otp();

        let expiry = expiry_after_seconds(match purpose {
            OtpPurpose::Verification => keyward.config.otp_expiry.expire_verification,
            OtpPurpose::Reset => keyward.config.otp_expiry.expire_password_reset,
        });

        let challenge = OtpChallenge {
            code: hash_secret(&code)?,
            expiry,
        };

        match purpose {
            OtpPurpose::Verification => self.verification = Some(challenge),
            OtpPurpose::Reset => self.password_reset = Some(challenge),
        }

        keyward.database.save_account(self).await?;

        Ok(code)
    }

    /// Check a submitted code against the outstanding challenge for
    /// `purpose`
    ///
    /// Whether the slot is cleared on success is the caller's decision:
    /// verification clears immediately, password reset keeps the code
    /// live until the reset is confirmed.
    pub fn check_challenge(&self, purpose: OtpPurpose, submitted: &str) -> Success {
        let slot = match purpose {
            OtpPurpose::Verification => &self.verification,
            OtpPurpose::Reset => &self.password_reset,
        };

        let challenge = slot.as_ref().ok_or(Error::CodeNotIssued)?;

        if is_expired(&challenge.expiry) {
            return Err(Error::CodeExpired);
        }

        if !verify_secret(submitted, &challenge.code) {
            return Err(Error::CodeMismatch);
        }

        Ok(())
    }
}

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    models::{ResetGrantClaims, Secret, SessionClaims},
    Error, Keyward, Result, Success,
};

impl Secret {
    /// Sign claims with secret
    pub fn sign_claims<T>(&self, claims: &T) -> String
    where
        T: Serialize,
    {
        let secret = self.expose().as_bytes();

        let (header, key) = (Header::default(), EncodingKey::from_secret(secret));

        jsonwebtoken::encode(&header, claims, &key).expect("JWT encoding should not fail")
    }

    /// Validate claims with secret
    ///
    /// Checks the signature and the embedded expiry in one step; the
    /// caller cannot tell which of the two failed.
    pub fn validate_claims<T>(&self, token: &str) -> Result<T, jsonwebtoken::errors::Error>
    where
        T: DeserializeOwned,
    {
        let secret = self.expose().as_bytes();

        let (validation, key) = (Validation::default(), DecodingKey::from_secret(secret));

        jsonwebtoken::decode(token, &key, &validation).map(|token| token.claims)
    }
}

impl Keyward {
    /// Mint a session token bound to an account id
    pub fn issue_session(&self, account_id: &str) -> String {
        let iat = chrono::Utc::now().timestamp();

        self.config.session_secret.sign_claims(&SessionClaims {
            id: account_id.to_string(),
            iat,
            exp: iat + self.config.token_expiry.expire_session,
        })
    }

    /// Resolve a session token back to its account id
    pub fn verify_session(&self, token: &str) -> Result<String> {
        self.config
            .session_secret
            .validate_claims::<SessionClaims>(token)
            .map(|claims| claims.id)
            .map_err(|_| Error::InvalidSession)
    }

    /// Mint a password reset grant bound to an email address
    pub fn issue_reset_grant(&self, email: &str) -> String {
        let iat = chrono::Utc::now().timestamp();

        self.config
            .reset_grant_secret
            .sign_claims(&ResetGrantClaims {
                email: email.to_string(),
                iat,
                exp: iat + self.config.token_expiry.expire_reset_grant,
            })
    }

    /// Check a reset grant against the email it must be paired with
    pub fn verify_reset_grant(&self, token: &str, expected_email: &str) -> Success {
        let claims = self
            .config
            .reset_grant_secret
            .validate_claims::<ResetGrantClaims>(token)
            .map_err(|_| Error::InvalidToken)?;

        if claims.email != expected_email {
            return Err(Error::EmailMismatch);
        }

        Ok(())
    }
}

use chrono::Duration;
use iso8601_timestamp::Timestamp;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::{Error, Result};

/// Work factor applied to every stored secret, passwords and one-time
/// codes alike. Each registration, login, code issuance and code check
/// pays this cost.
const HASH_COST: u32 = 10;

/// Generate a six digit one-time code
///
/// Drawn from the operating system's CSPRNG, uniform over
/// [100000, 999999].
pub fn generate_otp() -> String {
    OsRng.gen_range(100_000..=999_999u32).to_string()
}

/// Generate an opaque token of `byte_length` random bytes, hex encoded
pub fn random_token(byte_length: usize) -> String {
    let mut bytes = vec![0u8; byte_length];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hash a secret for at-rest storage using bcrypt
pub fn hash_secret(plaintext: &str) -> Result<String> {
    bcrypt::hash(plaintext, HASH_COST).map_err(|_| Error::InternalError)
}

/// Check a candidate secret against a stored digest
///
/// A malformed or empty digest counts as a mismatch, never an error.
pub fn verify_secret(candidate: &str, digest: &str) -> bool {
    bcrypt::verify(candidate, digest).unwrap_or(false)
}

/// Timestamp `seconds` from now
pub fn expiry_after_seconds(seconds: i64) -> Timestamp {
    Timestamp::from_unix_timestamp_ms(
        chrono::Utc::now()
            .checked_add_signed(Duration::seconds(seconds))
            .expect("failed to checked_add_signed")
            .timestamp_millis(),
    )
}

/// Whether a deadline has passed
pub fn is_expired(expiry: &Timestamp) -> bool {
    *expiry < Timestamp::now_utc()
}

mod email;
mod tokens;

pub use email::*;
pub use tokens::*;

use crate::models::Secret;

/// Keyward configuration
///
/// Constructed once at process start and carried immutably inside
/// [`crate::Keyward`]; nothing reads ambient state at runtime.
#[derive(Default, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Templates for one-time code delivery
    pub templates: Templates,

    /// One-time code validity windows
    pub otp_expiry: OtpExpiryConfig,

    /// Signed token lifetimes
    pub token_expiry: TokenExpiryConfig,

    /// Key material for session tokens
    pub session_secret: Secret,

    /// Key material for password reset grants
    ///
    /// Disjoint from the session secret and never derived from it; a
    /// leaked reset signer must not be able to forge sessions.
    pub reset_grant_secret: Secret,
}

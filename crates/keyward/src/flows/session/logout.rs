//! Logout of an account
//! POST /auth/logout
use crate::Success;

/// # Logout
///
/// Sessions are stateless, so logging out means the caller discards
/// its token. Nothing is invalidated server-side; the token stays
/// valid until its natural expiry.
pub fn logout() -> Success {
    Ok(())
}

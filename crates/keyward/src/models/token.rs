/// Claims carried by a session token
///
/// Self-contained: verification needs only the signature and the
/// embedded expiry, never a database lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account id the session is bound to
    pub id: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// Claims carried by a password reset grant
///
/// Bound to an email address rather than an account id; the grant is
/// only honoured when presented together with the same address.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetGrantClaims {
    /// Email address that proved control via a one-time code
    pub email: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

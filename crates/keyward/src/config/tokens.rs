/// Signed token lifetimes
#[derive(Serialize, Deserialize, Clone)]
pub struct TokenExpiryConfig {
    /// How long session tokens remain valid (in seconds)
    pub expire_session: i64,
    /// How long password reset grants remain valid (in seconds)
    pub expire_reset_grant: i64,
}

impl Default for TokenExpiryConfig {
    fn default() -> TokenExpiryConfig {
        TokenExpiryConfig {
            expire_session: 30 * 24 * 60 * 60,
            expire_reset_grant: 10 * 60,
        }
    }
}

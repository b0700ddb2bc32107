use iso8601_timestamp::Timestamp;

/// Which one-time code channel a challenge belongs to
///
/// The two channels never share a storage slot or a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    /// Proving control of the account's email address
    Verification,
    /// Authorising a password reset
    Reset,
}

/// An outstanding one-time code challenge
///
/// Each account holds at most one per purpose; issuing a new code
/// overwrites the previous challenge with no grace period.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OtpChallenge {
    /// bcrypt digest of the one-time code
    pub code: String,
    /// Time at which the code stops being accepted
    pub expiry: Timestamp,
}

/// Account model
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Account {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// User's email, stored case-sensitively
    pub email: String,

    /// bcrypt hashed password
    pub password: String,

    /// Whether control of the email address has been proven
    #[serde(default)]
    pub verified: bool,

    /// When verification succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<Timestamp>,

    /// Outstanding email verification challenge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<OtpChallenge>,

    /// Outstanding password reset challenge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_reset: Option<OtpChallenge>,
}

/// Public projection of an account
///
/// The only account shape that ever leaves the engine; carries no hash
/// or challenge material.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub verified: bool,
}

impl From<Account> for AccountInfo {
    fn from(account: Account) -> AccountInfo {
        AccountInfo {
            id: account.id,
            name: account.name,
            email: account.email,
            verified: account.verified,
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Error {
    IncorrectData {
        with: &'static str,
    },
    DatabaseError {
        operation: &'static str,
        with: &'static str,
    },
    InternalError,

    RenderFail,
    EmailFailed,

    AccountExists,
    UnknownUser,
    InvalidCredentials,

    CodeNotIssued,
    CodeExpired,
    CodeMismatch,

    InvalidSession,
    InvalidToken,
    EmailMismatch,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;

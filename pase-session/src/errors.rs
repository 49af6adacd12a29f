use thiserror::Error;

/// Errors returned by session and profile backends.
///
/// The `Display` output is shown to the user as-is, so variants carrying a
/// backend message print only that message.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),

    #[error("session storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("you are not signed in")]
    NotSignedIn,

    #[error("{0}")]
    Unavailable(String),
}

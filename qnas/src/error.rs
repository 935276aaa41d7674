use thiserror::Error as ThisError;

/// Errors returned by the QNAS client.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Network failure, timeout, or non-success HTTP status from the
    /// QNAS API.
    #[error("QNAS API unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),
    /// The response body could not be decoded as the expected record
    /// shape.
    #[error("QNAS API returned a malformed response: {0}")]
    Malformed(#[source] reqwest::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err)
        } else {
            Self::Unavailable(err)
        }
    }
}

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Precondition,
    Network,
    Decode,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credentials have an unsupported shape (e.g. username without password),
    /// or the credential file could not be read.
    #[error("{0}")]
    Config(String),

    /// The operation needs an authenticated session.
    #[error("{0}")]
    Precondition(&'static str),

    #[error("could not GET {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: NetworkError,
    },

    /// The server answered 200 but the payload did not match the expected shape.
    #[error("could not parse GitHub {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("could not create request")]
    Build(#[source] reqwest::Error),

    #[error("could not process request")]
    Transport(#[source] reqwest::Error),

    #[error("received non-OK status from GitHub: HTTP {0}")]
    Status(StatusCode),

    #[error("could not read body")]
    Body(#[source] reqwest::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Precondition(_) => ErrorKind::Precondition,
            Error::Network { .. } => ErrorKind::Network,
            Error::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// HTTP status carried by a non-OK response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Network {
                source: NetworkError::Status(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn network(url: &str, source: NetworkError) -> Self {
        Error::Network {
            url: url.to_string(),
            source,
        }
    }
}

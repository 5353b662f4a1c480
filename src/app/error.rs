use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresswireError {
    #[error("Content source is not configured")]
    NotConfigured,

    #[error("{0}")]
    Network(String),

    #[error("{0} category not found")]
    CategoryNotFound(&'static str),

    #[error("No description found in {0} category")]
    EmptyDescription(&'static str),

    #[error("Invalid JSON in {0} category description")]
    InvalidJson(&'static str),

    #[error("Invalid {0} data structure")]
    InvalidShape(&'static str),

    #[error("Post with slug \"{0}\" not found")]
    PostNotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A failure that may not carry any message at all.
    #[error("{}", .0.as_deref().unwrap_or_default())]
    Failure(Option<String>),
}

impl PresswireError {
    /// The message a fetch hook exposes for this failure, if there is one.
    pub fn message(&self) -> Option<String> {
        match self {
            PresswireError::Failure(message) => message.clone(),
            other => Some(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for PresswireError {
    fn from(err: reqwest::Error) -> Self {
        PresswireError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PresswireError>;

/// Result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Errors raised by the renderer, the content model and the site tooling.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid configuration, scene or command input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Surface allocation or image output failed.
    #[error("render error: {0}")]
    Render(String),

    /// Experience data could not be fetched.
    #[error("data error: {0}")]
    Data(String),

    /// A document could not be read or edited.
    #[error("markup error: {0}")]
    Markup(String),

    /// JSON that does not match the expected shape.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FolioError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`FolioError::Markup`] value.
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

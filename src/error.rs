use std::error::Error as StdError;

/// Failure to turn a document into a [`Feed`](crate::feed::Feed).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid RSS format: missing channel element")]
    MissingChannel,

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// The single error kind surfaced by the parsing and rendering core.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct UnhandledError {
    message: String,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl UnhandledError {
    pub fn wrap<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: err.to_string(),
            source: Box::new(err),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ParseError> for UnhandledError {
    fn from(err: ParseError) -> Self {
        Self::wrap(err)
    }
}

impl From<serde_json::Error> for UnhandledError {
    fn from(err: serde_json::Error) -> Self {
        Self::wrap(err)
    }
}

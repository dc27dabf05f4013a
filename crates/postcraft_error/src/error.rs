//! Top-level error wrapper types.

use crate::{AttachmentError, ConfigError, HttpError};

/// Every failure the composer can surface outside of field validation.
///
/// # Examples
///
/// ```
/// use postcraft_error::{ConfigError, PostcraftError};
///
/// let err: PostcraftError = ConfigError::new("bad layout").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostcraftErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Attachment loading error
    #[from(AttachmentError)]
    Attachment(AttachmentError),
}

/// Postcraft error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postcraft Error: {}", _0)]
pub struct PostcraftError(Box<PostcraftErrorKind>);

impl PostcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: PostcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostcraftErrorKind {
        &self.0
    }
}

impl<T> From<T> for PostcraftError
where
    T: Into<PostcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postcraft operations.
pub type PostcraftResult<T> = std::result::Result<T, PostcraftError>;

//! Errors raised while loading local image files.

/// Specific attachment loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AttachmentErrorKind {
    /// The file could not be read from disk
    #[display("Failed to read '{}': {}", path, reason)]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O message
        reason: String,
    },

    /// The path has no usable file name
    #[display("Path has no file name: {}", _0)]
    NoFileName(String),
}

/// Attachment error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Attachment Error: {} at line {} in {}", kind, line, file)]
pub struct AttachmentError {
    kind: AttachmentErrorKind,
    line: u32,
    file: &'static str,
}

impl AttachmentError {
    /// Create a new attachment error with caller location tracking.
    #[track_caller]
    pub fn new(kind: AttachmentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AttachmentErrorKind {
        &self.kind
    }
}

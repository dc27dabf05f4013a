//! HTTP error types.

/// Specific outbound request failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[display("Request failed: {}", _0)]
    Request(String),

    /// The endpoint answered with a non-2xx status
    #[display("Endpoint returned status {}", _0)]
    Status(u16),

    /// The response body could not be read or decoded
    #[display("Failed to read response body: {}", _0)]
    Body(String),

    /// The outbound payload could not be assembled
    #[display("Failed to build request payload: {}", _0)]
    Payload(String),
}

/// HTTP error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The error kind
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_error::{HttpError, HttpErrorKind};
    ///
    /// let err = HttpError::new(HttpErrorKind::Request("connection refused".into()));
    /// assert!(err.to_string().contains("connection refused"));
    /// ```
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Status code carried by the error, if the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            HttpErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

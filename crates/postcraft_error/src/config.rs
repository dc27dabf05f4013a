//! Errors raised while loading or checking composer configuration.

/// A configuration layer failed to parse, or the merged result is inconsistent.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong, naming the offending `section.key`
    pub message: String,
    /// Line that raised the error
    pub line: u32,
    /// Source file that raised the error
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration problem at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_error::ConfigError;
    ///
    /// let err = ConfigError::new("form.ai_assist is enabled but assist.endpoint is not set");
    /// assert!(err.to_string().starts_with("Configuration Error: form.ai_assist"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Error types for the Postcraft post composer.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with the source location that raised it
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! Field validation failures are not part of this hierarchy; they are plain
//! values returned by the form (see `postcraft_core::FieldErrors`).
//!
//! # Examples
//!
//! ```
//! use postcraft_error::{HttpError, HttpErrorKind, PostcraftResult};
//!
//! fn send() -> PostcraftResult<()> {
//!     Err(HttpError::new(HttpErrorKind::Status(502)))?
//! }
//!
//! assert!(send().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod config;
mod error;
mod http;

pub use attachment::{AttachmentError, AttachmentErrorKind};
pub use config::ConfigError;
pub use error::{PostcraftError, PostcraftErrorKind, PostcraftResult};
pub use http::{HttpError, HttpErrorKind};

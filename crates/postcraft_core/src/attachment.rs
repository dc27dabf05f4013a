//! Image attachments and the policy that admits them.

use crate::preview::{PreviewHandle, PreviewRegistry};
use postcraft_error::{AttachmentError, AttachmentErrorKind};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Most attachments a draft may hold.
pub const MAX_ATTACHMENTS: usize = 4;

/// Largest accepted attachment, in bytes (10 MiB).
pub const MAX_ATTACHMENT_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted as attachments.
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Warning shown when a batch would exceed [`MAX_ATTACHMENTS`].
pub const TOO_MANY_IMAGES_WARNING: &str = "You can upload a maximum of 4 images";

/// A locally selected file that has not been admitted yet.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct CandidateFile {
    /// File name without directory
    name: String,
    /// Declared MIME type
    mime: String,
    /// File contents, left empty when the file was never going to pass
    data: Vec<u8>,
    /// Size in bytes, as found on disk for unread files
    #[getter(skip)]
    size: usize,
}

impl CandidateFile {
    /// Create a candidate from in-memory contents.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        let size = data.len();
        Self {
            name: name.into(),
            mime: mime.into(),
            data,
            size,
        }
    }

    /// Read a candidate from disk, inferring its MIME type from the extension.
    ///
    /// Files with an unaccepted type or over [`MAX_ATTACHMENT_BYTES`] are not
    /// read: the candidate keeps the on-disk size and empty contents, and
    /// [`AttachmentSet::add`] drops it.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no file name or cannot be read.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read(path: impl AsRef<Path>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AttachmentError::new(AttachmentErrorKind::NoFileName(
                    path.display().to_string(),
                ))
            })?
            .to_string();

        let io_error = |e: std::io::Error| {
            AttachmentError::new(AttachmentErrorKind::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        };

        let mime = mime_for_path(path);
        let size = std::fs::metadata(path)
            .map(|m| usize::try_from(m.len()).unwrap_or(usize::MAX))
            .map_err(io_error)?;

        if !ACCEPTED_MIME_TYPES.contains(&mime) || size > MAX_ATTACHMENT_BYTES {
            debug!(size, mime, "Skipped reading candidate that cannot pass");
            return Ok(Self {
                name,
                mime: mime.to_string(),
                data: Vec::new(),
                size,
            });
        }

        let data = std::fs::read(path).map_err(io_error)?;

        debug!(bytes = data.len(), "Read candidate file");
        Ok(Self::new(name, mime, data))
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Guess a MIME type from a file extension.
///
/// Unknown extensions map to `application/octet-stream`, which the
/// attachment policy rejects.
///
/// # Examples
///
/// ```
/// use postcraft_core::mime_for_path;
///
/// assert_eq!(mime_for_path("photo.JPG"), "image/jpeg");
/// assert_eq!(mime_for_path("logo.png"), "image/png");
/// assert_eq!(mime_for_path("notes.txt"), "application/octet-stream");
/// ```
pub fn mime_for_path(path: impl AsRef<Path>) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Whether a candidate satisfies the type and size policy.
pub fn is_acceptable(candidate: &CandidateFile) -> bool {
    ACCEPTED_MIME_TYPES.contains(&candidate.mime.as_str())
        && candidate.size() <= MAX_ATTACHMENT_BYTES
}

/// An admitted image, carrying its preview handle.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Attachment {
    /// File name without directory
    name: String,
    /// MIME type, one of [`ACCEPTED_MIME_TYPES`]
    mime: String,
    /// File contents
    data: Vec<u8>,
    /// Preview bound to this attachment's lifetime
    preview: PreviewHandle,
}

/// Result of [`AttachmentSet::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Passing files were appended; failing ones dropped silently.
    Added {
        /// Files appended
        accepted: usize,
        /// Files dropped for type or size
        dropped: usize,
    },
    /// The batch would push the list past [`MAX_ATTACHMENTS`]; nothing changed.
    TooMany {
        /// Attachments already held
        existing: usize,
        /// Size of the rejected batch
        batch: usize,
    },
}

impl AddOutcome {
    /// User-facing warning, if the outcome calls for one.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            AddOutcome::Added { .. } => None,
            AddOutcome::TooMany { .. } => Some(TOO_MANY_IMAGES_WARNING),
        }
    }
}

/// Ordered list of admitted attachments.
///
/// Never holds more than [`MAX_ATTACHMENTS`] items, and every item passed
/// [`is_acceptable`] when it was added.
#[derive(Debug, Default)]
pub struct AttachmentSet {
    items: Vec<Attachment>,
    previews: PreviewRegistry,
}

impl AttachmentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of candidates, all or nothing on the count limit.
    ///
    /// The count check uses the raw batch length, before type/size
    /// filtering: a batch that could overflow the limit is rejected whole
    /// even if some of its files would have been dropped anyway.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_core::{AddOutcome, AttachmentSet, CandidateFile};
    ///
    /// let mut set = AttachmentSet::new();
    /// let batch = vec![
    ///     CandidateFile::new("a.jpg", "image/jpeg", vec![0; 16]),
    ///     CandidateFile::new("b.gif", "image/gif", vec![0; 16]),
    /// ];
    /// assert_eq!(set.add(batch), AddOutcome::Added { accepted: 1, dropped: 1 });
    /// assert_eq!(set.len(), 1);
    /// ```
    #[instrument(skip_all, fields(existing = self.items.len(), batch = candidates.len()))]
    pub fn add(&mut self, candidates: Vec<CandidateFile>) -> AddOutcome {
        let existing = self.items.len();
        let batch = candidates.len();

        if !self.has_room_for(batch) {
            warn!("Rejected attachment batch over the limit");
            return AddOutcome::TooMany { existing, batch };
        }

        let mut accepted = 0;
        for candidate in candidates {
            if !is_acceptable(&candidate) {
                debug!(name = %candidate.name, mime = %candidate.mime, size = candidate.size(), "Dropped attachment");
                continue;
            }
            let preview = self.previews.acquire();
            self.items.push(Attachment {
                name: candidate.name,
                mime: candidate.mime,
                data: candidate.data,
                preview,
            });
            accepted += 1;
        }

        debug!(accepted, total = self.items.len(), "Attachments added");
        AddOutcome::Added {
            accepted,
            dropped: batch - accepted,
        }
    }

    /// Whether a batch of `batch` files fits under [`MAX_ATTACHMENTS`].
    pub fn has_room_for(&self, batch: usize) -> bool {
        self.items.len() + batch <= MAX_ATTACHMENTS
    }

    /// Remove the attachment at `index`, releasing its preview.
    ///
    /// Returns `None` and changes nothing if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Attachment> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.previews.release(&removed.preview);
        Some(removed)
    }

    /// Drop every attachment and release every preview.
    pub fn clear(&mut self) {
        self.items.clear();
        self.previews.release_all();
    }

    /// Attachments in selection order.
    pub fn items(&self) -> &[Attachment] {
        &self.items
    }

    /// Number of attachments held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no attachments are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of previews not yet released.
    pub fn live_previews(&self) -> usize {
        self.previews.len()
    }

    /// Whether `handle` is still live.
    pub fn is_preview_live(&self, handle: &PreviewHandle) -> bool {
        self.previews.is_live(handle)
    }
}

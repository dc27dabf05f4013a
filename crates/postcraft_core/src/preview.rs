//! Preview handles scoped to the lifetime of an attachment.

use std::collections::HashSet;
use uuid::Uuid;

/// Opaque reference to a rendered preview of one attachment.
///
/// A handle is acquired when the attachment is accepted and released when
/// it is removed or the draft is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("preview:{}", _0)]
pub struct PreviewHandle(Uuid);

impl PreviewHandle {
    /// Underlying identifier.
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Tracks which preview handles are still live.
#[derive(Debug, Default)]
pub(crate) struct PreviewRegistry {
    live: HashSet<PreviewHandle>,
}

impl PreviewRegistry {
    pub(crate) fn acquire(&mut self) -> PreviewHandle {
        let handle = PreviewHandle(Uuid::new_v4());
        self.live.insert(handle);
        tracing::trace!(%handle, "Acquired preview");
        handle
    }

    pub(crate) fn release(&mut self, handle: &PreviewHandle) {
        if self.live.remove(handle) {
            tracing::trace!(%handle, "Released preview");
        }
    }

    pub(crate) fn release_all(&mut self) {
        self.live.clear();
    }

    pub(crate) fn is_live(&self, handle: &PreviewHandle) -> bool {
        self.live.contains(handle)
    }

    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }
}

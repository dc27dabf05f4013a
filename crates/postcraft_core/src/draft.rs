//! The post draft and its validated snapshot.

use crate::{Attachment, Platform};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use url::Url;

/// Field values as the user entered them.
///
/// Text fields are kept raw; nothing is parsed until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct PostDraft {
    /// Post title (1-100 characters)
    title: String,
    /// Post body (1-2200 characters)
    caption: String,
    /// Free-form hashtags
    hashtags: String,
    /// Selected platforms
    platforms: BTreeSet<Platform>,
    /// Schedule time as entered
    scheduled_at: String,
    /// Webhook endpoint as entered
    webhook_url: String,
}

impl PostDraft {
    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub(crate) fn set_hashtags(&mut self, hashtags: impl Into<String>) {
        self.hashtags = hashtags.into();
    }

    pub(crate) fn platforms_mut(&mut self) -> &mut BTreeSet<Platform> {
        &mut self.platforms
    }

    pub(crate) fn set_scheduled_at(&mut self, scheduled_at: impl Into<String>) {
        self.scheduled_at = scheduled_at.into();
    }

    pub(crate) fn set_webhook_url(&mut self, webhook_url: impl Into<String>) {
        self.webhook_url = webhook_url.into();
    }

    /// Whether every field still holds its initial value.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Immutable snapshot of a draft that passed validation.
///
/// Produced only by [`crate::PostForm::validate`], so every value here
/// satisfies the field rules and every attachment the type/size policy.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ValidatedDraft {
    /// Post title
    title: String,
    /// Post caption
    caption: String,
    /// Hashtags, empty when none were given
    hashtags: String,
    /// At least one platform
    platforms: BTreeSet<Platform>,
    /// Parsed schedule time
    scheduled_at: DateTime<Utc>,
    /// Parsed absolute webhook URL
    webhook_url: Url,
    /// Attachments in selection order
    attachments: Vec<Attachment>,
}

impl ValidatedDraft {
    pub(crate) fn new(
        draft: &PostDraft,
        scheduled_at: DateTime<Utc>,
        webhook_url: Url,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            title: draft.title.clone(),
            caption: draft.caption.clone(),
            hashtags: draft.hashtags.clone(),
            platforms: draft.platforms.clone(),
            scheduled_at,
            webhook_url,
            attachments,
        }
    }

    /// Platforms as the JSON array string sent on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_core::{FormConfig, Platform, PostForm};
    ///
    /// let mut form = PostForm::new(FormConfig::default());
    /// form.set_title("t");
    /// form.set_caption("c");
    /// form.set_platforms([Platform::Linkedin, Platform::Facebook]);
    /// form.set_scheduled_at("2030-01-01T00:00:00Z");
    /// form.set_webhook_url("https://example.com/hook");
    ///
    /// let draft = form.validate().unwrap();
    /// assert_eq!(draft.platforms_json(), r#"["facebook","linkedin"]"#);
    /// ```
    pub fn platforms_json(&self) -> String {
        let names: Vec<&str> = self.platforms.iter().map(|p| p.as_ref()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }
}

//! Form state: the draft, its attachments and the AI-assist panel.

use crate::validation::check;
use crate::{AttachmentSet, FieldErrors, Platform, PostDraft, ValidatedDraft};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the composer presents the draft. Has no effect on behaviour.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    /// Dense, one line per section
    Compact,
    /// Labelled, multi-line sections
    #[default]
    Expanded,
}

/// Optional features of a form instance.
///
/// # Examples
///
/// ```
/// use postcraft_core::{FormConfig, Layout};
///
/// let config = FormConfig::builder()
///     .ai_assist(false)
///     .layout(Layout::Compact)
///     .build()
///     .unwrap();
/// assert!(!config.ai_assist());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct FormConfig {
    /// Whether the AI-assist helper is offered
    #[builder(default = "true")]
    #[serde(default = "default_ai_assist")]
    ai_assist: bool,
    /// Presentation style
    #[builder(default)]
    #[serde(default)]
    layout: Layout,
}

fn default_ai_assist() -> bool {
    true
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            ai_assist: true,
            layout: Layout::default(),
        }
    }
}

impl FormConfig {
    /// Creates a new form config builder.
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder::default()
    }

    /// Whether the AI-assist helper is offered.
    pub fn ai_assist(&self) -> bool {
        self.ai_assist
    }

    /// Presentation style.
    pub fn layout(&self) -> Layout {
        self.layout
    }
}

/// State of the AI-assist prompt dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistPanel {
    open: bool,
    prompt: String,
}

impl AssistPanel {
    /// Whether the dialog is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Prompt text as typed.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Explicit state of one composer form instance.
///
/// Created empty, mutated by field edits and by AI-assist results, and
/// reset to empty after a successful submission.
#[derive(Debug, Default)]
pub struct PostForm {
    config: FormConfig,
    draft: PostDraft,
    attachments: AttachmentSet,
    assist: AssistPanel,
}

impl PostForm {
    /// Create an empty form.
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Feature configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current field values.
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Current attachments.
    pub fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    /// Mutable access for adding and removing attachments.
    pub fn attachments_mut(&mut self) -> &mut AttachmentSet {
        &mut self.attachments
    }

    /// AI-assist dialog state.
    pub fn assist(&self) -> &AssistPanel {
        &self.assist
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    /// Set the caption.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.draft.set_caption(caption);
    }

    /// Set the hashtags.
    pub fn set_hashtags(&mut self, hashtags: impl Into<String>) {
        self.draft.set_hashtags(hashtags);
    }

    /// Select `platform` if unselected, deselect it otherwise.
    pub fn toggle_platform(&mut self, platform: Platform) {
        let platforms = self.draft.platforms_mut();
        if !platforms.remove(&platform) {
            platforms.insert(platform);
        }
    }

    /// Replace the platform selection.
    pub fn set_platforms(&mut self, platforms: impl IntoIterator<Item = Platform>) {
        let selected = self.draft.platforms_mut();
        selected.clear();
        selected.extend(platforms);
    }

    /// Set the schedule as entered.
    pub fn set_scheduled_at(&mut self, scheduled_at: impl Into<String>) {
        self.draft.set_scheduled_at(scheduled_at);
    }

    /// Set the webhook URL as entered.
    pub fn set_webhook_url(&mut self, webhook_url: impl Into<String>) {
        self.draft.set_webhook_url(webhook_url);
    }

    /// Check every field rule and snapshot the draft.
    ///
    /// # Errors
    ///
    /// Returns every violated rule at once; the form is left untouched.
    #[instrument(skip(self), fields(attachments = self.attachments.len()))]
    pub fn validate(&self) -> Result<ValidatedDraft, FieldErrors> {
        let checked = check(&self.draft).inspect_err(|errors| {
            debug!(count = errors.len(), "Draft failed validation");
        })?;

        Ok(ValidatedDraft::new(
            &self.draft,
            checked.scheduled_at,
            checked.webhook_url,
            self.attachments.items().to_vec(),
        ))
    }

    /// Return draft, attachments and assist panel to their initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.draft = PostDraft::default();
        self.attachments.clear();
        self.assist = AssistPanel::default();
        debug!("Form reset");
    }

    /// Whether the form equals a freshly created one.
    pub fn is_pristine(&self) -> bool {
        self.draft.is_empty() && self.attachments.is_empty() && self.assist == AssistPanel::default()
    }

    /// Show the AI-assist dialog.
    pub fn open_assist(&mut self) {
        self.assist.open = true;
    }

    /// Hide the AI-assist dialog, keeping the prompt text.
    pub fn close_assist(&mut self) {
        self.assist.open = false;
    }

    /// Set the AI-assist prompt.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.assist.prompt = prompt.into();
    }

    /// Write generated text into caption and hashtags, then close the
    /// dialog and clear its prompt. Other fields are untouched.
    pub fn apply_generated(&mut self, caption: impl Into<String>, hashtags: impl Into<String>) {
        self.draft.set_caption(caption);
        self.draft.set_hashtags(hashtags);
        self.assist = AssistPanel::default();
    }
}

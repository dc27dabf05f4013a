//! Layered configuration for the composer.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`postcraft.toml` shipped with the crate)
//! 2. `~/.config/postcraft/postcraft.toml`
//! 3. `./postcraft.toml`
//! 4. An explicit file passed on the command line
//! 5. `POSTCRAFT__SECTION__KEY` environment variables
//!
//! User files are optional and skipped silently when absent.

use config::{Config, Environment, File, FileFormat};
use postcraft_core::FormConfig;
use postcraft_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};
use url::Url;

/// Bundled default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../postcraft.toml");

/// AI-assist settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistSettings {
    /// Endpoint receiving `{ "prompt": ... }`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Submission settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSettings {
    /// Webhook used when none is given explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Complete composer configuration.
///
/// # Example
///
/// ```toml
/// [form]
/// ai_assist = true
/// layout = "compact"
///
/// [assist]
/// endpoint = "https://automation.example.com/webhook/generate"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcraftConfig {
    /// Optional form features
    #[serde(default)]
    pub form: FormConfig,
    /// AI-assist settings
    #[serde(default)]
    pub assist: AssistSettings,
    /// Submission settings
    #[serde(default)]
    pub submission: SubmissionSettings,
}

impl PostcraftConfig {
    /// Parse a TOML document on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails [`Self::validate`].
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    /// Load every layer, with `extra` (if any) just below the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed, `extra` is missing,
    /// or the result fails [`Self::validate`].
    #[instrument(skip_all, fields(extra = ?extra.map(Path::display)))]
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/postcraft/postcraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("postcraft").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix("POSTCRAFT").separator("__"));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        debug!(
            ai_assist = config.form.ai_assist(),
            layout = %config.form.layout(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if AI assist is enabled without a valid absolute
    /// endpoint URL, or a configured endpoint does not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.parsed_endpoint()?;
        if self.form.ai_assist() && endpoint.is_none() {
            return Err(ConfigError::new(
                "form.ai_assist is enabled but assist.endpoint is not set",
            ));
        }
        Ok(())
    }

    /// The AI endpoint to inject into the composer, if AI assist is on.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured endpoint does not parse.
    pub fn assist_endpoint(&self) -> Result<Option<Url>, ConfigError> {
        if !self.form.ai_assist() {
            return Ok(None);
        }
        self.parsed_endpoint()
    }

    fn parsed_endpoint(&self) -> Result<Option<Url>, ConfigError> {
        match self.assist.endpoint.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Url::parse(raw).map(Some).map_err(|e| {
                ConfigError::new(format!("assist.endpoint '{}' is not a valid URL: {}", raw, e))
            }),
        }
    }
}

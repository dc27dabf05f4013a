//! Target platforms a post can be routed to.

use serde::{Deserialize, Serialize};

/// Social network the downstream automation should publish to.
///
/// Ordering follows declaration order, so a set of platforms always
/// serializes as `facebook`, `instagram`, `linkedin`.
///
/// # Examples
///
/// ```
/// use postcraft_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::from_str("linkedin").unwrap(), Platform::Linkedin);
/// assert_eq!(Platform::Instagram.to_string(), "instagram");
/// assert_eq!(Platform::Linkedin.label(), "LinkedIn");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    /// Facebook page post
    Facebook,
    /// Instagram feed post
    Instagram,
    /// LinkedIn share
    Linkedin,
}

impl Platform {
    /// Human-facing name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
        }
    }
}

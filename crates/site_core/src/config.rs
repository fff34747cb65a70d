use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::domain::SectionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse site settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_section: String,
    pub mobile_breakpoint_px: f64,
    pub navbar_shadow_threshold_px: f64,
    pub section_scroll_delay_ms: u64,
    pub submission_delay_ms: u64,
    pub message_auto_hide_ms: u64,
    pub navbar_shadow_raised: String,
    pub navbar_shadow_resting: String,
    pub reveal: RevealSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_section: "about".into(),
            mobile_breakpoint_px: 768.0,
            navbar_shadow_threshold_px: 50.0,
            section_scroll_delay_ms: 100,
            submission_delay_ms: 1000,
            message_auto_hide_ms: 5000,
            navbar_shadow_raised: "0 5px 20px rgba(0, 0, 0, 0.15)".into(),
            navbar_shadow_resting: "0 2px 10px rgba(0, 0, 0, 0.1)".into(),
            reveal: RevealSettings::default(),
        }
    }
}

/// Intersection observer options and the styles a project card moves between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f64,
    pub root_margin: String,
    pub hidden_transform: String,
    pub shown_transform: String,
    pub transition: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            hidden_transform: "translateY(20px)".into(),
            shown_transform: "translateY(0)".into(),
            transition: "opacity 0.6s ease, transform 0.6s ease".into(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.default_section.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "default_section",
                reason: "must name a section".into(),
            });
        }
        if !(self.mobile_breakpoint_px > 0.0) {
            return Err(SettingsError::Invalid {
                key: "mobile_breakpoint_px",
                reason: format!("expected a positive width, got {}", self.mobile_breakpoint_px),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(SettingsError::Invalid {
                key: "reveal.threshold",
                reason: format!("expected a ratio in [0, 1], got {}", self.reveal.threshold),
            });
        }
        Ok(())
    }

    pub fn default_section_id(&self) -> SectionId {
        SectionId::new(self.default_section.clone())
    }

    pub fn section_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.section_scroll_delay_ms)
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn message_auto_hide(&self) -> Duration {
        Duration::from_millis(self.message_auto_hide_ms)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

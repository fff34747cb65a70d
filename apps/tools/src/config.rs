use std::{fs, path::Path};

use anyhow::Context;
use site_core::Settings;

const DEFAULT_SETTINGS_FILE: &str = "site.toml";

/// Settings file (explicit path, else `./site.toml` if present), then `APP__*`
/// environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
            Settings::from_toml_str(&raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?
        }
        None => match fs::read_to_string(DEFAULT_SETTINGS_FILE) {
            Ok(raw) => Settings::from_toml_str(&raw)
                .with_context(|| format!("invalid settings file '{DEFAULT_SETTINGS_FILE}'"))?,
            Err(_) => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
        .validate()
        .context("settings invalid after environment overrides")?;
    Ok(settings)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__DEFAULT_SECTION") {
        settings.default_section = v;
    }
    if let Some(v) = lookup("APP__MOBILE_BREAKPOINT_PX") {
        if let Ok(parsed) = v.parse::<f64>() {
            settings.mobile_breakpoint_px = parsed;
        }
    }
    if let Some(v) = lookup("APP__NAVBAR_SHADOW_THRESHOLD_PX") {
        if let Ok(parsed) = v.parse::<f64>() {
            settings.navbar_shadow_threshold_px = parsed;
        }
    }
    if let Some(v) = lookup("APP__SECTION_SCROLL_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.section_scroll_delay_ms = parsed;
        }
    }
    if let Some(v) = lookup("APP__SUBMISSION_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.submission_delay_ms = parsed;
        }
    }
    if let Some(v) = lookup("APP__MESSAGE_AUTO_HIDE_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.message_auto_hide_ms = parsed;
        }
    }
}

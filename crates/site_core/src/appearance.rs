//! Navbar shadow and project-card reveal styling.

use serde::{Deserialize, Serialize};

use crate::{config::Settings, page::CardStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarElevation {
    #[default]
    Resting,
    Raised,
}

impl NavbarElevation {
    /// Raised strictly past the threshold.
    pub fn from_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            NavbarElevation::Raised
        } else {
            NavbarElevation::Resting
        }
    }

    pub fn box_shadow(self, settings: &Settings) -> &str {
        match self {
            NavbarElevation::Resting => &settings.navbar_shadow_resting,
            NavbarElevation::Raised => &settings.navbar_shadow_raised,
        }
    }
}

pub fn concealed_card(settings: &Settings) -> CardStyle {
    CardStyle {
        opacity: "0".into(),
        transform: settings.reveal.hidden_transform.clone(),
        transition: Some(settings.reveal.transition.clone()),
    }
}

pub fn revealed_card(settings: &Settings) -> CardStyle {
    CardStyle {
        opacity: "1".into(),
        transform: settings.reveal.shown_transform.clone(),
        transition: None,
    }
}

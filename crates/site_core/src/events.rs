//! Inputs to the reducer and the imperative effects it asks for.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{CardIndex, SectionId},
    protocol::{ContactSubmission, FormFields},
};

use crate::timers::{Deferred, TimerToken};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Event {
    Loaded {
        fragment: Option<String>,
        viewport_width: f64,
        scroll_y: f64,
    },
    HashChanged {
        fragment: Option<String>,
    },
    NavLinkClicked {
        section: SectionId,
    },
    HeroCtaClicked,
    MenuToggleClicked,
    DocumentClicked {
        inside_toggle: bool,
        inside_menu: bool,
    },
    FormSubmitted(FormFields),
    Scrolled {
        scroll_y: f64,
    },
    Resized {
        viewport_width: f64,
    },
    CardVisibilityChanged {
        card: CardIndex,
        intersecting: bool,
    },
    TimerElapsed(TimerToken),
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Loaded { .. } => "loaded",
            Event::HashChanged { .. } => "hash_changed",
            Event::NavLinkClicked { .. } => "nav_link_clicked",
            Event::HeroCtaClicked => "hero_cta_clicked",
            Event::MenuToggleClicked => "menu_toggle_clicked",
            Event::DocumentClicked { .. } => "document_clicked",
            Event::FormSubmitted(_) => "form_submitted",
            Event::Scrolled { .. } => "scrolled",
            Event::Resized { .. } => "resized",
            Event::CardVisibilityChanged { .. } => "card_visibility_changed",
            Event::TimerElapsed(_) => "timer_elapsed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetFragment(SectionId),
    ScrollSectionIntoView(SectionId),
    ScrollPageToTop,
    ResetForm,
    DeliverSubmission(ContactSubmission),
    StopObservingCard(CardIndex),
    Schedule(Deferred),
}

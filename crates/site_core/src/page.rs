//! Host seam: what the core knows about the markup, and what it asks the host to do.

use serde::{Deserialize, Serialize};
use shared::domain::{CardIndex, SectionId};

/// Elements collected from the markup once at start-up. Sections, nav links
/// and cards are addressed by their position in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOutline {
    pub sections: Vec<SectionId>,
    pub nav_links: Vec<SectionId>,
    pub cards: usize,
}

impl PageOutline {
    /// Position of the element `getElementById` would return for `id`.
    pub fn section_index(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|section| section == id)
    }

    pub fn has_section(&self, id: &SectionId) -> bool {
        self.section_index(id).is_some()
    }

    pub fn has_card(&self, card: CardIndex) -> bool {
        card.0 < self.cards
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    pub opacity: String,
    pub transform: String,
    pub transition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "patch", rename_all = "snake_case")]
pub enum Patch {
    Section { index: usize, active: bool },
    NavLink { index: usize, active: bool },
    Menu { open: bool },
    NavbarShadow { shadow: String },
    FormMessage { text: String, class: String },
    FormMessageHidden,
    Card { card: CardIndex, style: CardStyle },
}

/// Implemented by each host (browser DOM, headless page). Every method is
/// best effort: a host that cannot find the element skips the call.
pub trait Page {
    fn apply(&mut self, patch: &Patch);
    fn set_fragment(&mut self, section: &SectionId);
    fn scroll_section_into_view(&mut self, section: &SectionId);
    fn scroll_to_top(&mut self);
    fn reset_form(&mut self);
    fn stop_observing(&mut self, card: CardIndex);
}

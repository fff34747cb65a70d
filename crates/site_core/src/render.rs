//! Pure projection of `UiState` onto the page, and the patches between two projections.

use serde::Serialize;
use shared::domain::{CardIndex, SectionId};

use crate::{
    appearance,
    config::Settings,
    page::{CardStyle, PageOutline, Patch},
    state::UiState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageView {
    pub text: String,
    pub class: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub sections: Vec<bool>,
    pub nav_links: Vec<bool>,
    pub menu_open: bool,
    pub navbar_shadow: String,
    pub form_message: Option<MessageView>,
    pub cards: Vec<CardStyle>,
}

pub fn view(state: &UiState, outline: &PageOutline, settings: &Settings) -> View {
    let current = state.current_section.as_ref();
    let active_section = current.and_then(|id| outline.section_index(id));

    View {
        sections: (0..outline.sections.len())
            .map(|index| Some(index) == active_section)
            .collect(),
        nav_links: outline
            .nav_links
            .iter()
            .map(|target| Some(target) == current)
            .collect(),
        menu_open: state.menu_open,
        navbar_shadow: state.navbar.box_shadow(settings).to_string(),
        form_message: state.form.message.as_ref().map(|message| MessageView {
            text: message.text.clone(),
            class: message.kind.css_class().to_string(),
            visible: state.form.visible,
        }),
        cards: (0..outline.cards)
            .map(|index| {
                if state.revealed.contains(&CardIndex(index)) {
                    appearance::revealed_card(settings)
                } else {
                    appearance::concealed_card(settings)
                }
            })
            .collect(),
    }
}

/// With no previous view every element is written once.
pub fn diff(prev: Option<&View>, next: &View) -> Vec<Patch> {
    let mut patches = Vec::new();

    for (index, &active) in next.sections.iter().enumerate() {
        if prev.and_then(|p| p.sections.get(index)) != Some(&active) {
            patches.push(Patch::Section { index, active });
        }
    }

    for (index, &active) in next.nav_links.iter().enumerate() {
        if prev.and_then(|p| p.nav_links.get(index)) != Some(&active) {
            patches.push(Patch::NavLink { index, active });
        }
    }

    if prev.map(|p| p.menu_open) != Some(next.menu_open) {
        patches.push(Patch::Menu {
            open: next.menu_open,
        });
    }

    if prev.map(|p| p.navbar_shadow.as_str()) != Some(next.navbar_shadow.as_str()) {
        patches.push(Patch::NavbarShadow {
            shadow: next.navbar_shadow.clone(),
        });
    }

    let prev_message = prev.and_then(|p| p.form_message.as_ref());
    if let Some(message) = &next.form_message {
        let changed = prev_message.is_none_or(|old| {
            old.text != message.text || old.class != message.class || !old.visible
        });
        if message.visible && changed {
            patches.push(Patch::FormMessage {
                text: message.text.clone(),
                class: message.class.clone(),
            });
        } else if !message.visible && prev_message.is_some_and(|old| old.visible) {
            patches.push(Patch::FormMessageHidden);
        }
    }

    for (index, style) in next.cards.iter().enumerate() {
        if prev.and_then(|p| p.cards.get(index)) != Some(style) {
            patches.push(Patch::Card {
                card: CardIndex(index),
                style: style.clone(),
            });
        }
    }

    patches
}

/// Section the view marks active, for logging and snapshots.
pub fn active_section<'a>(view: &View, outline: &'a PageOutline) -> Option<&'a SectionId> {
    view.sections
        .iter()
        .position(|active| *active)
        .and_then(|index| outline.sections.get(index))
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;

//! In-memory page and virtual clock. Used by tests and `site-tools replay`.

use std::{collections::BTreeSet, time::Duration};

use serde::Serialize;
use shared::{
    domain::{CardIndex, SectionId},
    protocol::FormFields,
};

use crate::{
    config::Settings,
    controller::Controller,
    events::Event,
    page::{CardStyle, Page, PageOutline, Patch},
    timers::{Deferred, TimerToken},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scroll {
    SectionIntoView(SectionId),
    PageToTop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageElement {
    pub text: String,
    pub class: String,
    pub displayed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadlessPage {
    pub outline: PageOutline,
    pub fragment: Option<String>,
    pub sections: Vec<bool>,
    pub nav_links: Vec<bool>,
    pub menu_open: bool,
    pub navbar_shadow: Option<String>,
    pub form_message: Option<MessageElement>,
    pub fields: FormFields,
    pub form_resets: usize,
    pub cards: Vec<Option<CardStyle>>,
    pub observed: BTreeSet<CardIndex>,
    pub scrolls: Vec<Scroll>,
}

impl HeadlessPage {
    pub fn new(outline: PageOutline) -> Self {
        Self {
            sections: vec![false; outline.sections.len()],
            nav_links: vec![false; outline.nav_links.len()],
            cards: vec![None; outline.cards],
            observed: (0..outline.cards).map(CardIndex).collect(),
            outline,
            fragment: None,
            menu_open: false,
            navbar_shadow: None,
            form_message: None,
            fields: FormFields::default(),
            form_resets: 0,
            scrolls: Vec::new(),
        }
    }

    pub fn active_sections(&self) -> Vec<&SectionId> {
        self.outline
            .sections
            .iter()
            .zip(&self.sections)
            .filter_map(|(id, active)| active.then_some(id))
            .collect()
    }

    pub fn active_nav_targets(&self) -> Vec<&SectionId> {
        self.outline
            .nav_links
            .iter()
            .zip(&self.nav_links)
            .filter_map(|(id, active)| active.then_some(id))
            .collect()
    }

    /// Text of the form message if it is currently displayed.
    pub fn displayed_message(&self) -> Option<&str> {
        self.form_message
            .as_ref()
            .filter(|message| message.displayed)
            .map(|message| message.text.as_str())
    }
}

impl Page for HeadlessPage {
    fn apply(&mut self, patch: &Patch) {
        match patch {
            Patch::Section { index, active } => {
                if let Some(slot) = self.sections.get_mut(*index) {
                    *slot = *active;
                }
            }
            Patch::NavLink { index, active } => {
                if let Some(slot) = self.nav_links.get_mut(*index) {
                    *slot = *active;
                }
            }
            Patch::Menu { open } => self.menu_open = *open,
            Patch::NavbarShadow { shadow } => self.navbar_shadow = Some(shadow.clone()),
            Patch::FormMessage { text, class } => {
                self.form_message = Some(MessageElement {
                    text: text.clone(),
                    class: class.clone(),
                    displayed: true,
                });
            }
            Patch::FormMessageHidden => {
                if let Some(message) = &mut self.form_message {
                    message.displayed = false;
                }
            }
            Patch::Card { card, style } => {
                if let Some(slot) = self.cards.get_mut(card.0) {
                    let transition = style
                        .transition
                        .clone()
                        .or_else(|| slot.as_ref().and_then(|s| s.transition.clone()));
                    *slot = Some(CardStyle {
                        transition,
                        ..style.clone()
                    });
                }
            }
        }
    }

    fn set_fragment(&mut self, section: &SectionId) {
        self.fragment = Some(section.to_string());
    }

    fn scroll_section_into_view(&mut self, section: &SectionId) {
        self.scrolls.push(Scroll::SectionIntoView(section.clone()));
    }

    fn scroll_to_top(&mut self) {
        self.scrolls.push(Scroll::PageToTop);
    }

    fn reset_form(&mut self) {
        self.fields = FormFields::default();
        self.form_resets += 1;
    }

    fn stop_observing(&mut self, card: CardIndex) {
        self.observed.remove(&card);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    due: Duration,
    seq: u64,
    token: TimerToken,
}

/// Timers fire in due order; ties fire in the order they were armed.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

impl VirtualClock {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn arm(&mut self, deferred: Deferred) {
        self.seq += 1;
        self.pending.push(Pending {
            due: self.now + deferred.delay,
            seq: self.seq,
            token: deferred.token,
        });
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to it.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerToken> {
        let (index, next) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= until)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, pending)| (index, *pending))?;
        self.pending.swap_remove(index);
        self.now = self.now.max(next.due);
        Some(next.token)
    }

    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

/// A controller over a headless page, with timers run on a virtual clock.
pub struct Session {
    controller: Controller<HeadlessPage>,
    clock: VirtualClock,
}

impl Session {
    pub fn new(settings: Settings, outline: PageOutline) -> Self {
        let page = HeadlessPage::new(outline.clone());
        Self {
            controller: Controller::new(settings, outline, page),
            clock: VirtualClock::default(),
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        for deferred in self.controller.dispatch(event) {
            self.clock.arm(deferred);
        }
    }

    /// Runs every timer falling due within `by`, including ones armed while advancing.
    pub fn advance(&mut self, by: Duration) {
        let until = self.clock.now() + by;
        while let Some(token) = self.clock.pop_due(until) {
            self.dispatch(Event::TimerElapsed(token));
        }
        self.clock.settle(until);
    }

    pub fn load(&mut self, fragment: Option<&str>, viewport_width: f64) {
        self.dispatch(Event::Loaded {
            fragment: fragment.map(str::to_string),
            viewport_width,
            scroll_y: 0.0,
        });
    }

    /// Submits whatever is currently typed into the headless form.
    pub fn submit_form(&mut self) {
        let fields = self.page().fields.clone();
        self.dispatch(Event::FormSubmitted(fields));
    }

    pub fn page(&self) -> &HeadlessPage {
        self.controller.page()
    }

    pub fn page_mut(&mut self) -> &mut HeadlessPage {
        self.controller.page_mut()
    }

    pub fn controller(&self) -> &Controller<HeadlessPage> {
        &self.controller
    }

    pub fn clock(&self) -> &VirtualClock {
        &self.clock
    }
}

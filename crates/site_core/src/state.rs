use std::collections::BTreeSet;

use shared::{
    domain::{CardIndex, MessageKind, SectionId},
    protocol::ContactSubmission,
};

use crate::{appearance::NavbarElevation, timers::Generations};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub message: Option<FormMessage>,
    pub visible: bool,
    /// Accepted submission waiting for its simulated delivery.
    pub pending: Option<ContactSubmission>,
}

impl FormStatus {
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message = Some(FormMessage {
            text: text.into(),
            kind,
        });
        self.visible = true;
    }
}

/// The only mutable UI state. Changed by `reducer::update`, read by `render::view`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub current_section: Option<SectionId>,
    pub menu_open: bool,
    pub viewport_width: f64,
    pub navbar: NavbarElevation,
    pub form: FormStatus,
    pub revealed: BTreeSet<CardIndex>,
    pub timers: Generations,
}

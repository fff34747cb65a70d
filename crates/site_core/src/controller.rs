use tracing::{debug, warn};

use crate::{
    config::Settings,
    events::{Effect, Event},
    page::{Page, PageOutline},
    reducer,
    render::{self, View},
    state::UiState,
    timers::Deferred,
};

/// Owns the UI state and drives a `Page`: every event is reduced, re-rendered,
/// diffed against the last view, and its one-shot effects performed.
pub struct Controller<P: Page> {
    settings: Settings,
    outline: PageOutline,
    state: UiState,
    page: P,
    last_view: Option<View>,
}

impl<P: Page> Controller<P> {
    pub fn new(settings: Settings, outline: PageOutline, page: P) -> Self {
        Self {
            settings,
            outline,
            state: UiState::default(),
            page,
            last_view: None,
        }
    }

    /// Returns the timers the host has to arm.
    pub fn dispatch(&mut self, event: Event) -> Vec<Deferred> {
        let event_name = event.name();
        let effects = reducer::update(&mut self.state, event, &self.settings, &self.outline);

        let next = render::view(&self.state, &self.outline, &self.settings);
        let patches = render::diff(self.last_view.as_ref(), &next);
        debug!(
            event = event_name,
            patches = patches.len(),
            effects = effects.len(),
            section = render::active_section(&next, &self.outline).map(|s| s.as_str()),
            "dispatched"
        );
        for patch in &patches {
            self.page.apply(patch);
        }
        self.last_view = Some(next);

        let mut deferred = Vec::new();
        for effect in effects {
            match effect {
                Effect::SetFragment(section) => self.page.set_fragment(&section),
                Effect::ScrollSectionIntoView(section) => {
                    self.page.scroll_section_into_view(&section)
                }
                Effect::ScrollPageToTop => self.page.scroll_to_top(),
                Effect::ResetForm => self.page.reset_form(),
                Effect::StopObservingCard(card) => self.page.stop_observing(card),
                Effect::DeliverSubmission(submission) => match submission.to_json() {
                    Ok(body) => debug!(%body, "simulated contact delivery"),
                    Err(err) => warn!(error = %err, "failed to encode contact submission"),
                },
                Effect::Schedule(timer) => deferred.push(timer),
            }
        }
        deferred
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }
}

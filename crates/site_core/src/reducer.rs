//! State transitions. Pure apart from `tracing` output.

use shared::{
    domain::{MessageKind, SectionId},
    protocol::{FormFields, STATUS_SENDING, STATUS_SENT},
};
use tracing::{debug, info};

use crate::{
    appearance::NavbarElevation,
    config::Settings,
    events::{Effect, Event},
    form,
    page::PageOutline,
    router::{self, Resolution},
    state::UiState,
    timers::{TimerKind, TimerToken},
};

pub fn update(
    state: &mut UiState,
    event: Event,
    settings: &Settings,
    outline: &PageOutline,
) -> Vec<Effect> {
    let mut effects = Vec::new();

    match event {
        Event::Loaded {
            fragment,
            viewport_width,
            scroll_y,
        } => {
            state.viewport_width = viewport_width;
            state.navbar =
                NavbarElevation::from_scroll(scroll_y, settings.navbar_shadow_threshold_px);
            route(state, fragment.as_deref(), settings, outline, &mut effects);
        }
        Event::HashChanged { fragment } => {
            route(state, fragment.as_deref(), settings, outline, &mut effects);
        }
        Event::NavLinkClicked { section } => {
            navigate_to(state, section, settings, outline, &mut effects);
            state.menu_open = false;
        }
        Event::HeroCtaClicked => {
            navigate_to(
                state,
                settings.default_section_id(),
                settings,
                outline,
                &mut effects,
            );
        }
        Event::MenuToggleClicked => {
            state.menu_open = !state.menu_open;
        }
        Event::DocumentClicked {
            inside_toggle,
            inside_menu,
        } => {
            if !inside_toggle && !inside_menu {
                state.menu_open = false;
            }
        }
        Event::FormSubmitted(fields) => submit(state, &fields, settings, &mut effects),
        Event::Scrolled { scroll_y } => {
            state.navbar =
                NavbarElevation::from_scroll(scroll_y, settings.navbar_shadow_threshold_px);
        }
        Event::Resized { viewport_width } => {
            state.viewport_width = viewport_width;
        }
        Event::CardVisibilityChanged { card, intersecting } => {
            if intersecting && outline.has_card(card) && state.revealed.insert(card) {
                debug!(card = card.0, "revealing project card");
                effects.push(Effect::StopObservingCard(card));
            }
        }
        Event::TimerElapsed(token) => timer_elapsed(state, token, settings, &mut effects),
    }

    effects
}

fn route(
    state: &mut UiState,
    fragment: Option<&str>,
    settings: &Settings,
    outline: &PageOutline,
    effects: &mut Vec<Effect>,
) {
    match router::resolve(fragment, &settings.default_section_id(), outline) {
        Resolution::Known(section) => {
            debug!(section = %section, "routing to section");
            state.current_section = Some(section);
            let deferred = state
                .timers
                .issue(TimerKind::SectionScroll, settings.section_scroll_delay());
            effects.push(Effect::Schedule(deferred));
        }
        Resolution::Unknown(section) => {
            debug!(section = %section, "no such section; keeping current view");
        }
    }
}

fn navigate_to(
    state: &mut UiState,
    section: SectionId,
    settings: &Settings,
    outline: &PageOutline,
    effects: &mut Vec<Effect>,
) {
    if outline.has_section(&section) {
        effects.push(Effect::SetFragment(section.clone()));
    }
    route(state, Some(section.as_str()), settings, outline, effects);
}

fn submit(
    state: &mut UiState,
    fields: &FormFields,
    settings: &Settings,
    effects: &mut Vec<Effect>,
) {
    // A new attempt always replaces whatever the previous one was waiting on.
    state.form.pending = None;
    state.timers.supersede(TimerKind::SubmissionComplete);

    match form::validate(fields) {
        Err(err) => {
            debug!(error = %err, missing = ?err.missing_fields(), "contact form rejected");
            state.timers.supersede(TimerKind::MessageAutoHide);
            state.form.show(MessageKind::Error, err.to_string());
        }
        Ok(submission) => {
            info!(subject = %submission.subject, "contact form accepted");
            state.form.show(MessageKind::Success, STATUS_SENDING);
            state.form.pending = Some(submission);
            effects.push(Effect::Schedule(
                state
                    .timers
                    .issue(TimerKind::MessageAutoHide, settings.message_auto_hide()),
            ));
            effects.push(Effect::Schedule(
                state
                    .timers
                    .issue(TimerKind::SubmissionComplete, settings.submission_delay()),
            ));
        }
    }
}

fn timer_elapsed(
    state: &mut UiState,
    token: TimerToken,
    settings: &Settings,
    effects: &mut Vec<Effect>,
) {
    if !state.timers.is_current(token) {
        debug!(kind = ?token.kind, generation = token.generation, "dropping superseded timer");
        return;
    }

    match token.kind {
        TimerKind::SectionScroll => {
            let Some(section) = state.current_section.clone() else {
                return;
            };
            effects.push(Effect::ScrollSectionIntoView(section));
            if state.viewport_width <= settings.mobile_breakpoint_px {
                effects.push(Effect::ScrollPageToTop);
            }
        }
        TimerKind::SubmissionComplete => {
            let Some(submission) = state.form.pending.take() else {
                return;
            };
            effects.push(Effect::DeliverSubmission(submission));
            state.form.show(MessageKind::Success, STATUS_SENT);
            effects.push(Effect::ResetForm);
            effects.push(Effect::Schedule(
                state
                    .timers
                    .issue(TimerKind::MessageAutoHide, settings.message_auto_hide()),
            ));
        }
        TimerKind::MessageAutoHide => {
            state.form.visible = false;
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;

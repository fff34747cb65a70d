use super::*;
use shared::domain::CardIndex;

fn outline() -> PageOutline {
    PageOutline {
        sections: vec!["about".into(), "projects".into(), "contact".into()],
        nav_links: vec!["about".into(), "projects".into(), "contact".into()],
        cards: 2,
    }
}

fn loaded(fragment: Option<&str>, viewport_width: f64) -> Event {
    Event::Loaded {
        fragment: fragment.map(str::to_string),
        viewport_width,
        scroll_y: 0.0,
    }
}

fn scheduled(effects: &[Effect]) -> Vec<TimerToken> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Schedule(deferred) => Some(deferred.token),
            _ => None,
        })
        .collect()
}

fn valid_fields() -> FormFields {
    FormFields {
        name: Some("Grace".into()),
        email: Some("grace@example.com".into()),
        phone: Some("555-0101".into()),
        subject: Some("Compilers".into()),
        message: Some("Hello".into()),
    }
}

#[test]
fn load_without_fragment_routes_to_default_and_schedules_scroll() {
    let settings = Settings::default();
    let mut state = UiState::default();

    let effects = update(&mut state, loaded(None, 1280.0), &settings, &outline());

    assert_eq!(state.current_section, Some("about".into()));
    let timers = scheduled(&effects);
    assert_eq!(timers.len(), 1);
    assert_eq!(timers[0].kind, TimerKind::SectionScroll);
}

#[test]
fn unknown_fragment_keeps_previous_section() {
    let settings = Settings::default();
    let mut state = UiState::default();
    update(&mut state, loaded(Some("projects"), 1280.0), &settings, &outline());

    let effects = update(
        &mut state,
        Event::HashChanged {
            fragment: Some("missing".into()),
        },
        &settings,
        &outline(),
    );

    assert!(effects.is_empty());
    assert_eq!(state.current_section, Some("projects".into()));
}

#[test]
fn hash_change_to_current_section_supersedes_pending_scroll() {
    let settings = Settings::default();
    let mut state = UiState::default();
    update(&mut state, loaded(None, 1280.0), &settings, &outline());
    let clicked = update(
        &mut state,
        Event::NavLinkClicked {
            section: "contact".into(),
        },
        &settings,
        &outline(),
    );
    let click_scroll = scheduled(&clicked)[0];

    let effects = update(
        &mut state,
        Event::HashChanged {
            fragment: Some("contact".into()),
        },
        &settings,
        &outline(),
    );

    let timers = scheduled(&effects);
    assert_eq!(timers.len(), 1);
    assert_eq!(timers[0].kind, TimerKind::SectionScroll);
    assert!(state.timers.is_current(timers[0]));
    assert!(!state.timers.is_current(click_scroll));
    assert_eq!(state.current_section, Some("contact".into()));
}

#[test]
fn nav_click_sets_fragment_and_closes_menu() {
    let settings = Settings::default();
    let mut state = UiState::default();
    update(&mut state, loaded(None, 1280.0), &settings, &outline());
    update(&mut state, Event::MenuToggleClicked, &settings, &outline());
    assert!(state.menu_open);

    let effects = update(
        &mut state,
        Event::NavLinkClicked {
            section: "projects".into(),
        },
        &settings,
        &outline(),
    );

    assert!(!state.menu_open);
    assert_eq!(state.current_section, Some("projects".into()));
    assert_eq!(effects[0], Effect::SetFragment("projects".into()));
}

#[test]
fn nav_click_to_unknown_section_only_closes_menu() {
    let settings = Settings::default();
    let mut state = UiState::default();
    update(&mut state, loaded(None, 1280.0), &settings, &outline());
    state.menu_open = true;

    let effects = update(
        &mut state,
        Event::NavLinkClicked {
            section: "blog".into(),
        },
        &settings,
        &outline(),
    );

    assert!(effects.is_empty());
    assert!(!state.menu_open);
    assert_eq!(state.current_section, Some("about".into()));
}

#[test]
fn hero_cta_routes_to_default_section() {
    let settings = Settings::default();
    let mut state = UiState::default();
    update(&mut state, loaded(Some("contact"), 1280.0), &settings, &outline());

    let effects = update(&mut state, Event::HeroCtaClicked, &settings, &outline());

    assert_eq!(state.current_section, Some("about".into()));
    assert_eq!(effects[0], Effect::SetFragment("about".into()));
}

#[test]
fn click_inside_toggle_or_menu_keeps_menu_open() {
    let settings = Settings::default();
    let mut state = UiState {
        menu_open: true,
        ..UiState::default()
    };

    for (inside_toggle, inside_menu) in [(true, false), (false, true)] {
        update(
            &mut state,
            Event::DocumentClicked {
                inside_toggle,
                inside_menu,
            },
            &settings,
            &outline(),
        );
        assert!(state.menu_open);
    }

    update(
        &mut state,
        Event::DocumentClicked {
            inside_toggle: false,
            inside_menu: false,
        },
        &settings,
        &outline(),
    );
    assert!(!state.menu_open);
}

#[test]
fn stale_scroll_timer_is_dropped() {
    let settings = Settings::default();
    let mut state = UiState::default();
    let first = scheduled(&update(
        &mut state,
        loaded(None, 1280.0),
        &settings,
        &outline(),
    ))[0];
    let second = scheduled(&update(
        &mut state,
        Event::HashChanged {
            fragment: Some("projects".into()),
        },
        &settings,
        &outline(),
    ))[0];

    assert!(update(&mut state, Event::TimerElapsed(first), &settings, &outline()).is_empty());
    assert_eq!(
        update(&mut state, Event::TimerElapsed(second), &settings, &outline()),
        vec![Effect::ScrollSectionIntoView("projects".into())]
    );
}

#[test]
fn narrow_viewport_also_scrolls_page_to_top() {
    let settings = Settings::default();
    let mut state = UiState::default();
    let token = scheduled(&update(
        &mut state,
        loaded(Some("contact"), 768.0),
        &settings,
        &outline(),
    ))[0];

    assert_eq!(
        update(&mut state, Event::TimerElapsed(token), &settings, &outline()),
        vec![
            Effect::ScrollSectionIntoView("contact".into()),
            Effect::ScrollPageToTop
        ]
    );
}

#[test]
fn invalid_submission_shows_error_and_schedules_nothing() {
    let settings = Settings::default();
    let mut state = UiState::default();
    let mut fields = valid_fields();
    fields.email = Some("grace.example.com".into());

    let effects = update(
        &mut state,
        Event::FormSubmitted(fields),
        &settings,
        &outline(),
    );

    assert!(effects.is_empty());
    let message = state.form.message.as_ref().expect("message");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "Please enter a valid email address.");
    assert!(state.form.visible);
    assert!(state.form.pending.is_none());
}

#[test]
fn valid_submission_completes_after_delivery_timer() {
    let settings = Settings::default();
    let mut state = UiState::default();

    let effects = update(
        &mut state,
        Event::FormSubmitted(valid_fields()),
        &settings,
        &outline(),
    );
    assert_eq!(
        state.form.message.as_ref().map(|m| m.text.as_str()),
        Some(STATUS_SENDING)
    );
    let complete = scheduled(&effects)
        .into_iter()
        .find(|token| token.kind == TimerKind::SubmissionComplete)
        .expect("completion timer");

    let effects = update(
        &mut state,
        Event::TimerElapsed(complete),
        &settings,
        &outline(),
    );

    assert!(matches!(effects[0], Effect::DeliverSubmission(ref s) if s.name == "Grace"));
    assert!(effects.contains(&Effect::ResetForm));
    assert_eq!(
        state.form.message.as_ref().map(|m| m.text.as_str()),
        Some(STATUS_SENT)
    );
    assert!(state.form.pending.is_none());
}

#[test]
fn resubmission_supersedes_pending_delivery() {
    let settings = Settings::default();
    let mut state = UiState::default();
    let first = scheduled(&update(
        &mut state,
        Event::FormSubmitted(valid_fields()),
        &settings,
        &outline(),
    ));
    update(
        &mut state,
        Event::FormSubmitted(FormFields::default()),
        &settings,
        &outline(),
    );

    for token in first {
        assert!(update(&mut state, Event::TimerElapsed(token), &settings, &outline()).is_empty());
    }
    assert_eq!(
        state.form.message.as_ref().map(|m| m.kind),
        Some(MessageKind::Error)
    );
    assert!(state.form.visible);
}

#[test]
fn card_reveal_is_one_shot() {
    let settings = Settings::default();
    let mut state = UiState::default();
    let card = CardIndex(1);

    let effects = update(
        &mut state,
        Event::CardVisibilityChanged {
            card,
            intersecting: true,
        },
        &settings,
        &outline(),
    );
    assert_eq!(effects, vec![Effect::StopObservingCard(card)]);

    let effects = update(
        &mut state,
        Event::CardVisibilityChanged {
            card,
            intersecting: false,
        },
        &settings,
        &outline(),
    );
    assert!(effects.is_empty());
    assert!(state.revealed.contains(&card));
}

#[test]
fn out_of_range_card_is_ignored() {
    let settings = Settings::default();
    let mut state = UiState::default();
    let effects = update(
        &mut state,
        Event::CardVisibilityChanged {
            card: CardIndex(9),
            intersecting: true,
        },
        &settings,
        &outline(),
    );
    assert!(effects.is_empty());
    assert!(state.revealed.is_empty());
}

use super::*;
use shared::domain::MessageKind;

use crate::appearance::NavbarElevation;

fn outline() -> PageOutline {
    PageOutline {
        sections: vec!["about".into(), "projects".into(), "contact".into()],
        nav_links: vec![
            "about".into(),
            "projects".into(),
            "contact".into(),
            "projects".into(),
        ],
        cards: 2,
    }
}

fn state_on(section: &str) -> UiState {
    UiState {
        current_section: Some(section.into()),
        ..UiState::default()
    }
}

#[test]
fn exactly_one_section_is_active() {
    let settings = Settings::default();
    for section in ["about", "projects", "contact"] {
        let view = view(&state_on(section), &outline(), &settings);
        assert_eq!(view.sections.iter().filter(|active| **active).count(), 1);
        assert_eq!(
            active_section(&view, &outline()).map(SectionId::as_str),
            Some(section)
        );
    }
}

#[test]
fn every_nav_link_pointing_at_current_section_is_active() {
    let settings = Settings::default();
    let view = view(&state_on("projects"), &outline(), &settings);
    assert_eq!(view.nav_links, vec![false, true, false, true]);
}

#[test]
fn no_current_section_renders_nothing_active() {
    let settings = Settings::default();
    let view = view(&UiState::default(), &outline(), &settings);
    assert!(view.sections.iter().all(|active| !active));
    assert!(view.nav_links.iter().all(|active| !active));
}

#[test]
fn first_render_writes_every_element() {
    let settings = Settings::default();
    let next = view(&state_on("about"), &outline(), &settings);
    let patches = diff(None, &next);

    // 3 sections, 4 nav links, menu, navbar shadow, 2 cards; no message yet.
    assert_eq!(patches.len(), 11);
    assert!(patches.contains(&Patch::Section {
        index: 0,
        active: true
    }));
    assert!(patches.contains(&Patch::Menu { open: false }));
}

#[test]
fn routing_patches_only_changed_flags() {
    let settings = Settings::default();
    let prev = view(&state_on("about"), &outline(), &settings);
    let next = view(&state_on("contact"), &outline(), &settings);

    assert_eq!(
        diff(Some(&prev), &next),
        vec![
            Patch::Section {
                index: 0,
                active: false
            },
            Patch::Section {
                index: 2,
                active: true
            },
            Patch::NavLink {
                index: 0,
                active: false
            },
            Patch::NavLink {
                index: 2,
                active: true
            },
        ]
    );
}

#[test]
fn navbar_shadow_follows_elevation() {
    let settings = Settings::default();
    let resting = view(&state_on("about"), &outline(), &settings);
    let mut raised_state = state_on("about");
    raised_state.navbar = NavbarElevation::Raised;
    let raised = view(&raised_state, &outline(), &settings);

    assert_eq!(
        diff(Some(&resting), &raised),
        vec![Patch::NavbarShadow {
            shadow: settings.navbar_shadow_raised.clone()
        }]
    );
}

#[test]
fn message_patches_show_then_hide() {
    let settings = Settings::default();
    let empty = view(&state_on("contact"), &outline(), &settings);

    let mut state = state_on("contact");
    state.form.show(MessageKind::Success, "Sending message...");
    let shown = view(&state, &outline(), &settings);
    assert_eq!(
        diff(Some(&empty), &shown),
        vec![Patch::FormMessage {
            text: "Sending message...".into(),
            class: "form-message success".into(),
        }]
    );

    state.form.visible = false;
    let hidden = view(&state, &outline(), &settings);
    assert_eq!(diff(Some(&shown), &hidden), vec![Patch::FormMessageHidden]);

    state.form.show(MessageKind::Success, "Sending message...");
    let reshown = view(&state, &outline(), &settings);
    assert_eq!(diff(Some(&hidden), &reshown).len(), 1);
}

#[test]
fn revealed_card_is_patched_once() {
    let settings = Settings::default();
    let before = view(&state_on("projects"), &outline(), &settings);
    let mut state = state_on("projects");
    state.revealed.insert(CardIndex(0));
    let after = view(&state, &outline(), &settings);

    let patches = diff(Some(&before), &after);
    assert_eq!(patches.len(), 1);
    assert!(matches!(
        &patches[0],
        Patch::Card { card: CardIndex(0), style } if style.opacity == "1"
    ));
    assert!(diff(Some(&after), &after).is_empty());
}

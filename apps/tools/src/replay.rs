use std::time::Duration;

use serde::Deserialize;
use site_core::{headless::Session, Event, PageOutline, Settings};

#[derive(Debug, Deserialize)]
pub struct Script {
    pub outline: PageOutline,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Advance { advance_ms: u64 },
    Event(Event),
}

pub fn parse_script(raw: &str) -> serde_json::Result<Script> {
    serde_json::from_str(raw)
}

/// Runs every step, calling `observe` after each one.
pub fn run(
    settings: Settings,
    script: Script,
    mut observe: impl FnMut(usize, &Session),
) -> Session {
    let mut session = Session::new(settings, script.outline);
    for (index, step) in script.steps.into_iter().enumerate() {
        match step {
            Step::Advance { advance_ms } => session.advance(Duration::from_millis(advance_ms)),
            Step::Event(event) => session.dispatch(event),
        }
        observe(index, &session);
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"{
        "outline": {
            "sections": ["about", "projects", "contact"],
            "nav_links": ["about", "projects", "contact"],
            "cards": 1
        },
        "steps": [
            {"type": "loaded", "payload": {"fragment": null, "viewport_width": 1024, "scroll_y": 0}},
            {"type": "nav_link_clicked", "payload": {"section": "contact"}},
            {"type": "form_submitted", "payload": {
                "name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello"
            }},
            {"advance_ms": 1000},
            {"type": "menu_toggle_clicked"}
        ]
    }"#;

    #[test]
    fn replays_script_against_headless_page() {
        let script = parse_script(SCRIPT).expect("script");
        let mut observed = 0;

        let session = run(Settings::default(), script, |_, _| observed += 1);

        assert_eq!(observed, 5);
        let page = session.page();
        assert_eq!(page.fragment.as_deref(), Some("contact"));
        assert!(page.menu_open);
        assert_eq!(
            page.displayed_message(),
            Some(shared::protocol::STATUS_SENT)
        );
        assert_eq!(page.form_resets, 1);
    }

    #[test]
    fn rejects_unknown_step() {
        let raw = r#"{"outline": {}, "steps": [{"type": "teleport"}]}"#;
        assert!(parse_script(raw).is_err());
    }
}

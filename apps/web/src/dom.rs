//! `Page` implementation over the live document.

use shared::domain::{CardIndex, SectionId};
use site_core::{CardStyle, Page, PageOutline, Patch};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, IntersectionObserver, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

pub const CARD_INDEX_ATTR: &str = "data-card-index";
const ACTIVE_CLASS: &str = "active";

/// Handles to every element the navigation layer touches, looked up once.
#[derive(Clone)]
pub struct Markup {
    pub sections: Vec<Element>,
    pub nav_links: Vec<(Element, SectionId)>,
    pub hamburger: Option<Element>,
    pub menu: Option<Element>,
    pub navbar: Option<HtmlElement>,
    pub hero_button: Option<Element>,
    pub form: Option<HtmlFormElement>,
    pub form_message: Option<HtmlElement>,
    pub cards: Vec<HtmlElement>,
}

impl Markup {
    pub fn collect(document: &Document) -> Self {
        let cards: Vec<HtmlElement> = select_all(document, ".project-card")
            .into_iter()
            .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
            .collect();
        for (index, card) in cards.iter().enumerate() {
            if let Err(err) = card.set_attribute(CARD_INDEX_ATTR, &index.to_string()) {
                warn!(error = ?err, index, "failed to tag project card");
            }
        }

        Self {
            sections: select_all(document, ".section"),
            nav_links: select_all(document, ".nav-link")
                .into_iter()
                .map(|link| {
                    let target = link.get_attribute("data-section").unwrap_or_default();
                    (link, SectionId::new(target))
                })
                .collect(),
            hamburger: document.get_element_by_id("hamburger"),
            menu: document.get_element_by_id("navMenu"),
            navbar: select_one(document, ".navbar")
                .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok()),
            hero_button: select_one(document, ".hero .btn-primary"),
            form: document
                .get_element_by_id("contactForm")
                .and_then(|form| form.dyn_into::<HtmlFormElement>().ok()),
            form_message: document
                .get_element_by_id("formMessage")
                .and_then(|message| message.dyn_into::<HtmlElement>().ok()),
            cards,
        }
    }

    pub fn outline(&self) -> PageOutline {
        PageOutline {
            sections: self
                .sections
                .iter()
                .map(|section| SectionId::new(section.id()))
                .collect(),
            nav_links: self
                .nav_links
                .iter()
                .map(|(_, target)| target.clone())
                .collect(),
            cards: self.cards.len(),
        }
    }
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            warn!(selector, error = ?err, "selector query failed");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn select_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn set_active(element: &Element, active: bool) {
    if let Err(err) = element.class_list().toggle_with_force(ACTIVE_CLASS, active) {
        warn!(error = ?err, "failed to toggle active class");
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!(property, error = ?err, "failed to set style");
    }
}

fn log_failure(action: &'static str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!(action, error = ?err, "dom call failed");
    }
}

pub struct DomPage {
    window: Window,
    document: Document,
    markup: Markup,
    observer: Option<IntersectionObserver>,
}

impl DomPage {
    pub fn new(window: Window, document: Document, markup: Markup) -> Self {
        Self {
            window,
            document,
            markup,
            observer: None,
        }
    }

    pub fn attach_observer(&mut self, observer: IntersectionObserver) {
        self.observer = Some(observer);
    }

    fn apply_card_style(&self, card: CardIndex, style: &CardStyle) {
        let Some(element) = self.markup.cards.get(card.0) else {
            return;
        };
        set_style(element, "opacity", &style.opacity);
        set_style(element, "transform", &style.transform);
        if let Some(transition) = &style.transition {
            set_style(element, "transition", transition);
        }
    }
}

impl Page for DomPage {
    fn apply(&mut self, patch: &Patch) {
        match patch {
            Patch::Section { index, active } => {
                if let Some(section) = self.markup.sections.get(*index) {
                    set_active(section, *active);
                }
            }
            Patch::NavLink { index, active } => {
                if let Some((link, _)) = self.markup.nav_links.get(*index) {
                    set_active(link, *active);
                }
            }
            Patch::Menu { open } => {
                for element in [&self.markup.menu, &self.markup.hamburger]
                    .into_iter()
                    .flatten()
                {
                    set_active(element, *open);
                }
            }
            Patch::NavbarShadow { shadow } => {
                if let Some(navbar) = &self.markup.navbar {
                    set_style(navbar, "box-shadow", shadow);
                }
            }
            Patch::FormMessage { text, class } => {
                if let Some(message) = &self.markup.form_message {
                    message.set_text_content(Some(text.as_str()));
                    message.set_class_name(class);
                    if let Err(err) = message.style().remove_property("display") {
                        warn!(error = ?err, "failed to show form message");
                    }
                }
            }
            Patch::FormMessageHidden => {
                if let Some(message) = &self.markup.form_message {
                    set_style(message, "display", "none");
                }
            }
            Patch::Card { card, style } => self.apply_card_style(*card, style),
        }
    }

    fn set_fragment(&mut self, section: &SectionId) {
        log_failure("set_hash", self.window.location().set_hash(section.as_str()));
    }

    fn scroll_section_into_view(&mut self, section: &SectionId) {
        let Some(element) = self.document.get_element_by_id(section.as_str()) else {
            debug!(%section, "section vanished before scroll");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn reset_form(&mut self) {
        if let Some(form) = &self.markup.form {
            form.reset();
        }
    }

    fn stop_observing(&mut self, card: CardIndex) {
        if let (Some(observer), Some(element)) = (&self.observer, self.markup.cards.get(card.0)) {
            observer.unobserve(element);
        }
    }
}

//! DOM listeners, the page event queue, and timer arming.

use std::{cell::RefCell, rc::Rc};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::{domain::CardIndex, protocol::FormFields};
use site_core::{router, Controller, Deferred, Event, Settings};
use tracing::{debug, info, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, EventTarget, FormData, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node, Window,
};

use crate::dom::{DomPage, Markup, CARD_INDEX_ATTR};

const EVENT_QUEUE_CAPACITY: usize = 64;

pub struct App {
    window: Window,
    controller: RefCell<Controller<DomPage>>,
    events_tx: Sender<Event>,
    events_rx: Receiver<Event>,
}

impl App {
    pub fn post(self: &Rc<Self>, event: Event) {
        let name = event.name();
        match self.events_tx.try_send(event) {
            Ok(()) => debug!(event = name, "queued page event"),
            Err(TrySendError::Full(_)) => {
                warn!(event = name, "page event queue is full; dropping event");
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(event = name, "page event queue disconnected; dropping event");
            }
        }
        self.pump();
    }

    /// Drains the queue unless an outer pump already holds the controller.
    fn pump(self: &Rc<Self>) {
        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            return;
        };
        while let Ok(event) = self.events_rx.try_recv() {
            for deferred in controller.dispatch(event) {
                self.arm(deferred);
            }
        }
    }

    fn arm(self: &Rc<Self>, deferred: Deferred) {
        let app = Rc::clone(self);
        let token = deferred.token;
        let callback = Closure::once_into_js(move || app.post(Event::TimerElapsed(token)));
        let delay = i32::try_from(deferred.delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            warn!(kind = ?token.kind, error = ?err, "failed to arm timer");
        }
    }
}

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        warn!(kind, error = ?err, "failed to add event listener");
    }
    closure.forget();
}

fn current_fragment(window: &Window) -> Option<String> {
    let href = window.location().href().ok()?;
    router::fragment_from_href(&href)
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

fn read_form(form: &HtmlFormElement) -> FormFields {
    let Ok(data) = FormData::new_with_form(form) else {
        warn!("failed to read contact form data");
        return FormFields::default();
    };
    let field = |name: &str| data.get(name).as_string();
    FormFields {
        name: field("name"),
        email: field("email"),
        phone: field("phone"),
        subject: field("subject"),
        message: field("message"),
    }
}

fn contains(container: Option<&web_sys::Element>, target: Option<&Node>) -> bool {
    match container {
        Some(container) => container.contains(target),
        None => false,
    }
}

pub fn boot(window: Window, document: Document, settings: Settings) {
    let markup = Markup::collect(&document);
    let outline = markup.outline();
    info!(
        sections = outline.sections.len(),
        nav_links = outline.nav_links.len(),
        cards = outline.cards,
        "navigation layer starting"
    );

    let reveal = settings.reveal.clone();
    let page = DomPage::new(window.clone(), document.clone(), markup.clone());
    let (events_tx, events_rx) = bounded(EVENT_QUEUE_CAPACITY);
    let app = Rc::new(App {
        window: window.clone(),
        controller: RefCell::new(Controller::new(settings, outline, page)),
        events_tx,
        events_rx,
    });

    for (link, section) in &markup.nav_links {
        let app = Rc::clone(&app);
        let section = section.clone();
        listen(link, "click", move |event| {
            event.prevent_default();
            app.post(Event::NavLinkClicked {
                section: section.clone(),
            });
        });
    }

    {
        let app = Rc::clone(&app);
        let window_for_hash = window.clone();
        listen(&window, "hashchange", move |_| {
            app.post(Event::HashChanged {
                fragment: current_fragment(&window_for_hash),
            });
        });
    }

    if let Some(hamburger) = &markup.hamburger {
        let app = Rc::clone(&app);
        listen(hamburger, "click", move |_| app.post(Event::MenuToggleClicked));
    }

    {
        let app = Rc::clone(&app);
        let hamburger = markup.hamburger.clone();
        let menu = markup.menu.clone();
        listen(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            app.post(Event::DocumentClicked {
                inside_toggle: contains(hamburger.as_ref(), target.as_ref()),
                inside_menu: contains(menu.as_ref(), target.as_ref()),
            });
        });
    }

    if let Some(hero_button) = &markup.hero_button {
        let app = Rc::clone(&app);
        listen(hero_button, "click", move |event| {
            event.prevent_default();
            app.post(Event::HeroCtaClicked);
        });
    }

    if let Some(form) = &markup.form {
        let app = Rc::clone(&app);
        let form_for_submit = form.clone();
        listen(form, "submit", move |event| {
            event.prevent_default();
            app.post(Event::FormSubmitted(read_form(&form_for_submit)));
        });
    }

    {
        let app = Rc::clone(&app);
        let window_for_scroll = window.clone();
        listen(&window, "scroll", move |_| {
            let scroll_y = window_for_scroll.scroll_y().unwrap_or_default();
            app.post(Event::Scrolled { scroll_y });
        });
    }

    {
        let app = Rc::clone(&app);
        let window_for_resize = window.clone();
        listen(&window, "resize", move |_| {
            app.post(Event::Resized {
                viewport_width: viewport_width(&window_for_resize),
            });
        });
    }

    // Cards must be styled as concealed before the observer first reports.
    app.post(Event::Loaded {
        fragment: current_fragment(&window),
        viewport_width: viewport_width(&window),
        scroll_y: window.scroll_y().unwrap_or_default(),
    });

    if !markup.cards.is_empty() {
        observe_cards(&app, &markup, &reveal);
    }
}

fn observe_cards(app: &Rc<App>, markup: &Markup, reveal: &site_core::RevealSettings) {
    let callback_app = Rc::clone(app);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(card) = entry
                    .target()
                    .get_attribute(CARD_INDEX_ATTR)
                    .and_then(|index| index.parse::<usize>().ok())
                else {
                    continue;
                };
                callback_app.post(Event::CardVisibilityChanged {
                    card: CardIndex(card),
                    intersecting: entry.is_intersecting(),
                });
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&reveal.threshold.into());
    options.set_root_margin(&reveal.root_margin);
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            warn!(error = ?err, "intersection observer unavailable; cards stay concealed");
            return;
        }
    };
    callback.forget();

    for card in &markup.cards {
        observer.observe(card);
    }
    match app.controller.try_borrow_mut() {
        Ok(mut controller) => controller.page_mut().attach_observer(observer),
        Err(_) => warn!("controller busy; revealed cards will stay observed"),
    }
}

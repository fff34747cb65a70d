//! Hash routing, nav highlighting, mobile menu, contact form and scroll effects
//! for a single-page portfolio site, independent of any particular DOM binding.

pub mod appearance;
pub mod config;
pub mod controller;
pub mod events;
pub mod form;
pub mod headless;
pub mod page;
pub mod reducer;
pub mod render;
pub mod router;
pub mod state;
pub mod timers;

pub use config::{RevealSettings, Settings, SettingsError};
pub use controller::Controller;
pub use events::{Effect, Event};
pub use page::{CardStyle, Page, PageOutline, Patch};
pub use state::UiState;
pub use timers::{Deferred, TimerKind, TimerToken};

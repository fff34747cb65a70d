//! Fragment parsing and section resolution.

use shared::domain::SectionId;
use url::Url;

use crate::page::PageOutline;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Known(SectionId),
    Unknown(SectionId),
}

/// Fragment of a full `location.href`; `None` when it is absent or empty.
pub fn fragment_from_href(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.fragment()
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
}

pub fn resolve(fragment: Option<&str>, default: &SectionId, outline: &PageOutline) -> Resolution {
    let id = match fragment {
        Some(fragment) if !fragment.is_empty() => SectionId::from(fragment),
        _ => default.clone(),
    };

    if outline.has_section(&id) {
        Resolution::Known(id)
    } else {
        Resolution::Unknown(id)
    }
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;

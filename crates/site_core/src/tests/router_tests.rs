use super::*;

fn outline() -> PageOutline {
    PageOutline {
        sections: vec!["about".into(), "projects".into(), "contact".into()],
        nav_links: vec!["about".into(), "projects".into(), "contact".into()],
        cards: 0,
    }
}

#[test]
fn reads_fragment_from_local_file_with_query() {
    assert_eq!(
        fragment_from_href("file:///home/visitor/site/index.html?lang=en#projects").as_deref(),
        Some("projects")
    );
}

#[test]
fn extracts_fragment_from_full_url() {
    assert_eq!(
        fragment_from_href("https://example.com/index.html#contact").as_deref(),
        Some("contact")
    );
    assert_eq!(fragment_from_href("https://example.com/#"), None);
    assert_eq!(fragment_from_href("https://example.com/"), None);
    assert_eq!(fragment_from_href("not a url"), None);
}

#[test]
fn missing_fragment_resolves_to_default() {
    let default = SectionId::from("about");
    assert_eq!(
        resolve(None, &default, &outline()),
        Resolution::Known("about".into())
    );
    assert_eq!(
        resolve(Some(""), &default, &outline()),
        Resolution::Known("about".into())
    );
}

#[test]
fn unknown_fragment_is_reported_not_failed() {
    let default = SectionId::from("about");
    let resolution = resolve(Some("blog"), &default, &outline());
    assert_eq!(resolution, Resolution::Unknown("blog".into()));
}

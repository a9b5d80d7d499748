//! The compiled-in ExpressKit content set.
//!
//! Content is code, not files: the two collections are defined here as
//! plain constructors and compiled into the binary, so a build can never
//! be missing its data and the registry needs no I/O to populate.
//!
//! Ordering in these files is display order for the list pages. Lookup
//! never depends on it.

mod docs;
mod templates;

use crate::types::{ContentEntry, EntryKind, Section};

pub use docs::docs;
pub use templates::templates;

/// A documentation topic.
fn doc(id: &str, title: &str, sections: Vec<Section>) -> ContentEntry {
    ContentEntry {
        id: id.to_string(),
        title: title.to_string(),
        sections,
        kind: EntryKind::Doc,
    }
}

/// A code template with its category and card description.
fn template(
    id: &str,
    title: &str,
    category: &str,
    description: &str,
    sections: Vec<Section>,
) -> ContentEntry {
    ContentEntry {
        id: id.to_string(),
        title: title.to_string(),
        sections,
        kind: EntryKind::Template {
            description: description.to_string(),
            category: category.to_string(),
            usage: None,
        },
    }
}

/// Section with prose only.
fn text(heading: &str, body: &str) -> Section {
    Section {
        heading: heading.to_string(),
        body: Some(body.to_string()),
        code: None,
        filename: None,
    }
}

/// Section with a code payload and no prose.
fn snippet(heading: &str, code: &str) -> Section {
    Section {
        heading: heading.to_string(),
        body: None,
        code: Some(code.to_string()),
        filename: None,
    }
}

/// Section with prose followed by a code payload.
fn example(heading: &str, body: &str, code: &str) -> Section {
    Section {
        heading: heading.to_string(),
        body: Some(body.to_string()),
        code: Some(code.to_string()),
        filename: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_doc_id_is_url_safe() {
        for entry in docs() {
            assert!(
                entry
                    .id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "doc id {:?} is not a URL-safe token",
                entry.id
            );
        }
    }

    #[test]
    fn every_template_has_category_and_description() {
        for entry in templates() {
            match entry.kind {
                EntryKind::Template {
                    ref description,
                    ref category,
                    ..
                } => {
                    assert!(!description.is_empty(), "{} has empty description", entry.id);
                    assert!(!category.is_empty(), "{} has empty category", entry.id);
                }
                EntryKind::Doc => panic!("{} is not a template", entry.id),
            }
        }
    }

    #[test]
    fn no_entry_has_empty_title_or_heading() {
        for entry in docs().into_iter().chain(templates()) {
            assert!(!entry.title.is_empty());
            for section in &entry.sections {
                assert!(!section.heading.is_empty(), "empty heading in {}", entry.id);
            }
        }
    }

    #[test]
    fn code_payloads_are_nonempty_when_present() {
        for entry in docs().into_iter().chain(templates()) {
            for section in &entry.sections {
                if let Some(code) = &section.code {
                    assert!(!code.trim().is_empty(), "blank code block in {}", entry.id);
                }
            }
        }
    }
}

//! Shared content types.
//!
//! These types are the common vocabulary of the registry, the renderer,
//! and the build manifest. Entries are immutable after construction: the
//! registry is built once at startup and only ever read afterwards.

use serde::Serialize;

/// Which of the two registry collections an id is resolved against.
///
/// The routing boundary (CLI, generated link structure) selects a
/// collection; lookup semantics are identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Docs,
    Templates,
}

impl Collection {
    /// URL path segment for this collection (`docs/` or `templates/`).
    pub fn slug(self) -> &'static str {
        match self {
            Collection::Docs => "docs",
            Collection::Templates => "templates",
        }
    }

    /// Display heading used on the list page.
    pub fn list_title(self) -> &'static str {
        match self {
            Collection::Docs => "Express.js Documentation",
            Collection::Templates => "Express.js Templates",
        }
    }
}

/// One addressable content item: a documentation topic or a code template.
///
/// `id`, `title`, and `sections` are the common base; everything that
/// differs between the two shapes lives in [`EntryKind`] and is pattern
/// matched in the renderer rather than probed for presence.
#[derive(Debug, Clone, Serialize)]
pub struct ContentEntry {
    /// Unique, URL-safe identifier within the entry's collection.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Ordered sections; may be empty, and an empty list renders as an
    /// entry with no body rather than an error.
    pub sections: Vec<Section>,
    #[serde(flatten)]
    pub kind: EntryKind,
}

/// Variant-specific fields of a [`ContentEntry`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryKind {
    Doc,
    Template {
        /// Short blurb shown on the list card and under the detail title.
        description: String,
        /// Grouping label ("Core Templates", "Database Templates", ...).
        category: String,
        /// Free-text usage notes; rendered as a trailing block when present.
        #[serde(skip_serializing_if = "Option::is_none")]
        usage: Option<String>,
    },
}

impl ContentEntry {
    /// Short description for list cards.
    ///
    /// Templates carry one explicitly. Docs derive it from the first
    /// section body; docs whose first section is code-only get none, and
    /// the card simply omits the line.
    pub fn summary(&self) -> Option<String> {
        match &self.kind {
            EntryKind::Template { description, .. } => Some(description.clone()),
            EntryKind::Doc => self
                .sections
                .first()
                .and_then(|s| s.body.as_deref())
                .map(|body| truncate_chars(body, 120)),
        }
    }
}

/// One heading/body/code/filename sub-unit of an entry, rendered in order.
///
/// `code` is an opaque preformatted payload: whitespace-significant,
/// displayed verbatim (escaped, never interpreted).
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Truncate to `max` characters on a char boundary, appending `...`.
fn truncate_chars(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_entry(body: Option<&str>) -> ContentEntry {
        ContentEntry {
            id: "sample".to_string(),
            title: "Sample".to_string(),
            sections: vec![Section {
                heading: "First".to_string(),
                body: body.map(String::from),
                code: None,
                filename: None,
            }],
            kind: EntryKind::Doc,
        }
    }

    #[test]
    fn doc_summary_comes_from_first_section_body() {
        let entry = doc_entry(Some("Express is a web framework."));
        assert_eq!(
            entry.summary().as_deref(),
            Some("Express is a web framework.")
        );
    }

    #[test]
    fn doc_summary_absent_when_first_section_is_code_only() {
        let entry = doc_entry(None);
        assert_eq!(entry.summary(), None);
    }

    #[test]
    fn template_summary_is_its_description() {
        let entry = ContentEntry {
            id: "routes".to_string(),
            title: "Routes".to_string(),
            sections: vec![],
            kind: EntryKind::Template {
                description: "Clean route organization".to_string(),
                category: "Core Templates".to_string(),
                usage: None,
            },
        };
        assert_eq!(entry.summary().as_deref(), Some("Clean route organization"));
    }

    #[test]
    fn summary_truncates_long_bodies_with_ellipsis() {
        let long = "x".repeat(300);
        let entry = doc_entry(Some(&long));
        let summary = entry.summary().unwrap();
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= 123);
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let text = "é".repeat(200);
        let cut = truncate_chars(&text, 120);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn collection_slugs() {
        assert_eq!(Collection::Docs.slug(), "docs");
        assert_eq!(Collection::Templates.slug(), "templates");
    }
}

//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display
//! for every entry is its semantic identity — positional index and title —
//! with ids, categories, and output paths as indented context lines.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## List
//!
//! ```text
//! Docs (20 topics)
//! 001 What is Express.js? (2 sections)
//!     Id: what-is-express
//!
//! Templates (9 templates)
//! 001 Controllers (1 section)
//!     Id: controllers
//!     Category: Core Templates
//! ```
//!
//! ## Build
//!
//! ```text
//! ExpressKit → index.html
//! 404 → 404.html
//! Docs → docs/index.html
//! 001 What is Express.js? → docs/what-is-express/index.html
//! ...
//! Generated 20 doc pages, 9 template pages
//! ```

use crate::generate::SiteManifest;
use crate::registry::Registry;
use crate::types::{Collection, ContentEntry, EntryKind};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Entry header: positional index + title + section count.
fn entry_header(index: usize, entry: &ContentEntry) -> String {
    let sections = entry.sections.len();
    let noun = if sections == 1 { "section" } else { "sections" };
    format!("{} {} ({} {})", format_index(index), entry.title, sections, noun)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// List command
// ============================================================================

/// Format the content inventory: both collections, in collection order.
pub fn format_list_output(registry: &Registry) -> Vec<String> {
    let mut lines = Vec::new();

    let docs = registry.collection(Collection::Docs);
    lines.push(format!("Docs ({} topics)", docs.len()));
    for (i, entry) in docs.iter().enumerate() {
        lines.push(entry_header(i + 1, entry));
        lines.push(format!("    Id: {}", entry.id));
    }

    lines.push(String::new());

    let templates = registry.collection(Collection::Templates);
    lines.push(format!("Templates ({} templates)", templates.len()));
    for (i, entry) in templates.iter().enumerate() {
        lines.push(entry_header(i + 1, entry));
        lines.push(format!("    Id: {}", entry.id));
        if let EntryKind::Template {
            category,
            description,
            ..
        } = &entry.kind
        {
            lines.push(format!("    Category: {}", category));
            let desc = truncate_desc(description, 60);
            if !desc.is_empty() {
                lines.push(format!("    {}", desc));
            }
        }
    }

    lines
}

pub fn print_list_output(registry: &Registry) {
    for line in format_list_output(registry) {
        println!("{}", line);
    }
}

// ============================================================================
// Check command
// ============================================================================

/// Format the validation summary shown after the registry built cleanly.
pub fn format_check_output(registry: &Registry) -> Vec<String> {
    let docs = registry.enumerate_ids(Collection::Docs).len();
    let templates = registry.enumerate_ids(Collection::Templates).len();
    vec![
        format!("Docs: {} entries, all ids unique", docs),
        format!("Templates: {} entries, all ids unique", templates),
        format!("Detail pages to generate: {}", docs + templates),
    ]
}

pub fn print_check_output(registry: &Registry) {
    for line in format_check_output(registry) {
        println!("{}", line);
    }
}

// ============================================================================
// Build command
// ============================================================================

/// Format build output: every generated page, detail pages indexed per
/// collection, followed by a summary line.
pub fn format_build_output(manifest: &SiteManifest) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0usize;
    let mut current: Option<Collection> = None;

    for page in &manifest.pages {
        match page.collection {
            None => {
                lines.push(format!("{} → {}", page.title, page.output));
            }
            Some(collection) => {
                let is_list = page.route == format!("/{}/", collection.slug());
                if is_list {
                    position = 0;
                    current = Some(collection);
                    lines.push(format!("{} → {}", page.title, page.output));
                } else {
                    debug_assert_eq!(current, Some(collection));
                    position += 1;
                    lines.push(format!(
                        "{} {} → {}",
                        format_index(position),
                        page.title,
                        page.output
                    ));
                }
            }
        }
    }

    lines.push(format!(
        "Generated {} doc pages, {} template pages",
        manifest.detail_count(Collection::Docs),
        manifest.detail_count(Collection::Templates),
    ));
    lines
}

pub fn print_build_output(manifest: &SiteManifest) {
    for line in format_build_output(manifest) {
        println!("{}", line);
    }
}

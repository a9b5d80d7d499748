//! HTML page rendering.
//!
//! Every page the site serves is produced here: the home page, the two
//! list views, one detail view per resolved entry, and the not-found
//! view. Rendering is pure — a page is a function of (config, registry
//! data, requested id) with no I/O and no shared mutable state, so any
//! number of renders may run concurrently.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, which is
//! what keeps code payloads verbatim-but-safe: a payload containing
//! `<script>` renders as text, never as markup.
//!
//! ## Detail render boundary
//!
//! [`render_page`] is the resolve-then-render seam: it looks the id up in
//! the registry and maps the result to either the detail view or the
//! not-found view. A miss is a normal outcome here, not an error — it
//! never propagates past this function.

use crate::config::SiteConfig;
use crate::registry::Registry;
use crate::types::{Collection, ContentEntry, EntryKind, Section};
use maud::{DOCTYPE, Markup, html};

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Full stylesheet: configured color variables plus the static rules.
pub fn stylesheet(config: &SiteConfig) -> String {
    let color_css = crate::config::generate_color_css(&config.colors);
    format!("{}\n\n{}", color_css, CSS_STATIC)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header: brand link plus top navigation.
fn site_header(config: &SiteConfig, current: Option<Collection>) -> Markup {
    let docs_current = current == Some(Collection::Docs);
    let templates_current = current == Some(Collection::Templates);
    html! {
        header.site-header {
            a.brand href="/" { (config.site.title) }
            nav.site-nav {
                ul {
                    li class=[docs_current.then_some("current")] {
                        a href="/docs/" { "Docs" }
                    }
                    li class=[templates_current.then_some("current")] {
                        a href="/templates/" { "Templates" }
                    }
                    li {
                        a href=(config.site.repository) target="_blank" rel="noopener" { "GitHub" }
                    }
                }
            }
        }
    }
}

/// Per-collection footer line with a link back to the collection index.
fn collection_footer(collection: Collection, config: &SiteConfig) -> Markup {
    let label = match collection {
        Collection::Docs => "Documentation",
        Collection::Templates => "Templates",
    };
    html! {
        footer.page-footer {
            p { (config.site.title) " " (label) }
            p {
                "Browse more "
                a href={ "/" (collection.slug()) "/" } { (collection.slug()) }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page: hero plus entry points into both collections.
pub fn render_home(config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(config, None))
        main.home-page {
            section.hero {
                h1 { (config.site.title) }
                p.tagline { (config.site.tagline) }
                p.hero-copy {
                    "Learn Express.js the right way. Clean docs, real-world \
                     templates, and easy-to-copy examples."
                }
                a.cta href="/docs/" { "Get Started" }
            }
            section.entry-points {
                a.entry-card href="/docs/" {
                    h2 { "Documentation" }
                    p { "Guides from first install to RESTful APIs." }
                }
                a.entry-card href="/templates/" {
                    h2 { "Templates" }
                    p { "Production-ready boilerplate you can copy into your app." }
                }
            }
        }
    };
    base_document(&config.site.title, css, content)
}

/// Renders a list view: one summary card per entry, in collection order.
///
/// No filtering, search, or pagination. The templates variant appends a
/// categories overview below the cards.
pub fn render_list(
    collection: Collection,
    entries: &[ContentEntry],
    config: &SiteConfig,
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(config, Some(collection)))
        main.list-page {
            header.list-header {
                h1 { (collection.list_title()) }
                @if collection == Collection::Templates {
                    p.list-intro {
                        "Production-ready code templates and boilerplates to \
                         accelerate your Express.js development."
                    }
                }
                div.accent-rule {}
            }
            div.card-grid {
                @for entry in entries {
                    a.card href={ "/" (collection.slug()) "/" (entry.id) "/" } {
                        article {
                            h2 { (entry.title) }
                            @if let Some(summary) = entry.summary() {
                                p.card-summary { (summary) }
                            }
                            span.card-more { "View " (collection.slug().trim_end_matches('s')) " →" }
                        }
                    }
                }
            }
            @if collection == Collection::Templates {
                (categories_overview(entries))
            }
        }
        (collection_footer(collection, config))
    };
    base_document(collection.list_title(), css, content)
}

/// Categories overview for the templates list: each category with the
/// titles it contains, in first-appearance order.
fn categories_overview(entries: &[ContentEntry]) -> Markup {
    let mut categories: Vec<(&str, Vec<&str>)> = Vec::new();
    for entry in entries {
        if let EntryKind::Template { category, .. } = &entry.kind {
            match categories
                .iter_mut()
                .find(|(name, _)| *name == category.as_str())
            {
                Some((_, titles)) => titles.push(entry.title.as_str()),
                None => categories.push((category.as_str(), vec![entry.title.as_str()])),
            }
        }
    }
    html! {
        section.categories {
            h3 { "Template Categories" }
            @for (name, titles) in &categories {
                div.category {
                    h4 { (name) }
                    ul {
                        @for title in titles {
                            li { (title) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders a detail view for one resolved entry.
///
/// Sections render in order as heading + optional body + optional verbatim
/// code block + optional filename label. Absent optional fields are
/// omitted from the output entirely.
pub fn render_detail(
    collection: Collection,
    entry: &ContentEntry,
    config: &SiteConfig,
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(config, Some(collection)))
        main.detail-page {
            header.detail-header {
                h1 { (entry.title) }
                @if let EntryKind::Template { description, .. } = &entry.kind {
                    p.detail-description { (description) }
                }
                div.accent-rule {}
            }
            div.section-list {
                @for section in &entry.sections {
                    (render_section(section))
                }
            }
            @if let EntryKind::Template { usage: Some(usage), .. } = &entry.kind {
                div.usage-notes {
                    h3 { "Usage Notes" }
                    p { (usage) }
                }
            }
        }
        (collection_footer(collection, config))
    };
    base_document(&entry.title, css, content)
}

fn render_section(section: &Section) -> Markup {
    html! {
        article.section {
            h2 { (section.heading) }
            @if let Some(body) = &section.body {
                p.section-body { (body) }
            }
            @if let Some(code) = &section.code {
                div.code-block {
                    pre { code { (code) } }
                }
            }
            @if let Some(filename) = &section.filename {
                span.filename { (filename) }
            }
        }
    }
}

/// Renders the not-found view: a fixed 404 indicator.
///
/// When the addressed collection is known the message names its entry
/// kind; the site-wide 404 page uses the generic variant.
pub fn render_not_found(collection: Option<Collection>, config: &SiteConfig, css: &str) -> Markup {
    let message = match collection {
        Some(Collection::Docs) => "Topic Not Found",
        Some(Collection::Templates) => "Template Not Found",
        None => "Page Not Found",
    };
    let content = html! {
        (site_header(config, collection))
        main.not-found-page {
            div.not-found {
                h1 { "404" }
                p { (message) }
            }
        }
    };
    base_document("404", css, content)
}

/// Resolve an id against the registry and render the outcome.
///
/// Returns the detail view for a hit and the not-found view for a miss.
/// Always produces exactly one page.
pub fn render_page(
    registry: &Registry,
    collection: Collection,
    id: &str,
    config: &SiteConfig,
    css: &str,
) -> Markup {
    match registry.resolve(collection, id) {
        Some(entry) => render_detail(collection, entry, config, css),
        None => render_not_found(Some(collection), config, css),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    fn section(heading: &str, body: Option<&str>, code: Option<&str>) -> Section {
        Section {
            heading: heading.to_string(),
            body: body.map(String::from),
            code: code.map(String::from),
            filename: None,
        }
    }

    fn doc(id: &str, title: &str, sections: Vec<Section>) -> ContentEntry {
        ContentEntry {
            id: id.to_string(),
            title: title.to_string(),
            sections,
            kind: EntryKind::Doc,
        }
    }

    #[test]
    fn base_document_includes_doctype() {
        let html = render_home(&config(), "body {}").into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>ExpressKit</title>"));
    }

    #[test]
    fn home_links_to_both_collections() {
        let html = render_home(&config(), "").into_string();
        assert!(html.contains(r#"href="/docs/""#));
        assert!(html.contains(r#"href="/templates/""#));
        assert!(html.contains("Get Started"));
    }

    #[test]
    fn header_marks_current_collection() {
        let html = render_list(Collection::Docs, &[], &config(), "").into_string();
        assert!(html.contains(r#"class="current""#));
    }

    #[test]
    fn list_preserves_collection_order() {
        let entries = vec![
            doc("first", "First Topic", vec![]),
            doc("second", "Second Topic", vec![]),
            doc("third", "Third Topic", vec![]),
        ];
        let html = render_list(Collection::Docs, &entries, &config(), "").into_string();
        let first = html.find("First Topic").unwrap();
        let second = html.find("Second Topic").unwrap();
        let third = html.find("Third Topic").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn list_cards_link_to_detail_pages() {
        let entries = vec![doc("what-is-express", "What is Express.js?", vec![])];
        let html = render_list(Collection::Docs, &entries, &config(), "").into_string();
        assert!(html.contains(r#"href="/docs/what-is-express/""#));
    }

    #[test]
    fn templates_list_shows_categories_overview() {
        let entries = vec![ContentEntry {
            id: "controllers".to_string(),
            title: "Controllers".to_string(),
            sections: vec![],
            kind: EntryKind::Template {
                description: "Reusable controllers".to_string(),
                category: "Core Templates".to_string(),
                usage: None,
            },
        }];
        let html = render_list(Collection::Templates, &entries, &config(), "").into_string();
        assert!(html.contains("Template Categories"));
        assert!(html.contains("Core Templates"));
        assert!(html.contains("Reusable controllers"));
    }

    #[test]
    fn detail_renders_sections_in_order() {
        let entry = doc(
            "sample",
            "Sample",
            vec![
                section("Alpha", Some("first body"), None),
                section("Beta", Some("second body"), None),
            ],
        );
        let html = render_detail(Collection::Docs, &entry, &config(), "").into_string();
        assert!(html.find("Alpha").unwrap() < html.find("Beta").unwrap());
        assert!(html.contains("first body"));
    }

    #[test]
    fn detail_omits_code_block_when_section_has_no_code() {
        let entry = doc("sample", "Sample", vec![section("Prose Only", Some("text"), None)]);
        let html = render_detail(Collection::Docs, &entry, &config(), "").into_string();
        assert!(!html.contains("code-block"));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn detail_omits_body_when_section_is_code_only() {
        let entry = doc("sample", "Sample", vec![section("Code Only", None, Some("x = 1"))]);
        let html = render_detail(Collection::Docs, &entry, &config(), "").into_string();
        assert!(!html.contains("section-body"));
        assert!(html.contains("x = 1"));
    }

    #[test]
    fn detail_with_empty_sections_renders_without_error() {
        let entry = doc("bare", "Bare Entry", vec![]);
        let html = render_detail(Collection::Docs, &entry, &config(), "").into_string();
        assert!(html.contains("Bare Entry"));
    }

    #[test]
    fn code_payload_is_escaped_not_executed() {
        let entry = doc(
            "sample",
            "Sample",
            vec![section("Payload", None, Some("<script>alert('xss')</script>"))],
        );
        let html = render_detail(Collection::Docs, &entry, &config(), "").into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn template_detail_shows_description_and_filename() {
        let entry = ContentEntry {
            id: "routes".to_string(),
            title: "Routes".to_string(),
            sections: vec![Section {
                heading: "Modular Routes".to_string(),
                body: None,
                code: Some("module.exports = router;".to_string()),
                filename: Some("routes/users.js".to_string()),
            }],
            kind: EntryKind::Template {
                description: "Clean route organization".to_string(),
                category: "Core Templates".to_string(),
                usage: None,
            },
        };
        let html = render_detail(Collection::Templates, &entry, &config(), "").into_string();
        assert!(html.contains("Clean route organization"));
        assert!(html.contains("routes/users.js"));
    }

    #[test]
    fn usage_notes_render_only_when_present() {
        let mut entry = ContentEntry {
            id: "routes".to_string(),
            title: "Routes".to_string(),
            sections: vec![],
            kind: EntryKind::Template {
                description: "d".to_string(),
                category: "c".to_string(),
                usage: None,
            },
        };
        let without = render_detail(Collection::Templates, &entry, &config(), "").into_string();
        assert!(!without.contains("Usage Notes"));

        entry.kind = EntryKind::Template {
            description: "d".to_string(),
            category: "c".to_string(),
            usage: Some("Drop this into routes/.".to_string()),
        };
        let with = render_detail(Collection::Templates, &entry, &config(), "").into_string();
        assert!(with.contains("Usage Notes"));
        assert!(with.contains("Drop this into routes/."));
    }

    #[test]
    fn not_found_message_names_the_collection() {
        let docs = render_not_found(Some(Collection::Docs), &config(), "").into_string();
        assert!(docs.contains("404"));
        assert!(docs.contains("Topic Not Found"));

        let templates = render_not_found(Some(Collection::Templates), &config(), "").into_string();
        assert!(templates.contains("Template Not Found"));

        let generic = render_not_found(None, &config(), "").into_string();
        assert!(generic.contains("Page Not Found"));
    }

    #[test]
    fn render_page_maps_hit_to_detail_and_miss_to_not_found() {
        let registry = Registry::stock().unwrap();
        let cfg = config();

        let hit = render_page(&registry, Collection::Docs, "what-is-express", &cfg, "");
        assert!(hit.into_string().contains("What is Express.js?"));

        let miss = render_page(&registry, Collection::Docs, "nonexistent-id", &cfg, "");
        let miss = miss.into_string();
        assert!(miss.contains("404"));
        assert!(miss.contains("Topic Not Found"));
    }

    #[test]
    fn stylesheet_injects_configured_colors() {
        let css = stylesheet(&config());
        assert!(css.contains("--color-accent: #38bdf8"));
        assert!(css.contains("var(--color-background)"));
    }
}

//! End-to-end build: generate the full site into a temp directory and
//! verify the generated tree matches the enumerated content.

use expresskit::config::SiteConfig;
use expresskit::generate;
use expresskit::registry::Registry;
use expresskit::types::Collection;
use std::fs;
use std::path::Path;

fn build_site(output: &Path) -> generate::SiteManifest {
    let registry = Registry::stock().unwrap();
    let config = SiteConfig::default();
    generate::generate(&registry, &config, output).unwrap()
}

#[test]
fn build_writes_one_detail_page_per_enumerated_id() {
    let dir = tempfile::tempdir().unwrap();
    build_site(dir.path());

    let registry = Registry::stock().unwrap();
    for collection in [Collection::Docs, Collection::Templates] {
        for id in registry.enumerate_ids(collection) {
            let page = dir.path().join(collection.slug()).join(id).join("index.html");
            assert!(page.is_file(), "missing detail page for {id}");
        }
    }
}

#[test]
fn build_writes_site_chrome_pages() {
    let dir = tempfile::tempdir().unwrap();
    build_site(dir.path());

    assert!(dir.path().join("index.html").is_file());
    assert!(dir.path().join("404.html").is_file());
    assert!(dir.path().join("docs/index.html").is_file());
    assert!(dir.path().join("templates/index.html").is_file());

    let not_found = fs::read_to_string(dir.path().join("404.html")).unwrap();
    assert!(not_found.contains("404"));
    assert!(not_found.contains("Page Not Found"));
}

#[test]
fn manifest_matches_generated_tree() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = build_site(dir.path());

    // Home, 404, two list pages, 20 doc details, 9 template details.
    assert_eq!(manifest.pages.len(), 2 + 2 + 20 + 9);
    assert_eq!(manifest.detail_count(Collection::Docs), 20);
    assert_eq!(manifest.detail_count(Collection::Templates), 9);

    for page in &manifest.pages {
        assert!(
            dir.path().join(&page.output).is_file(),
            "manifest lists {} but it was not written",
            page.output
        );
    }

    let json = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
    assert!(json.contains("/docs/what-is-express/"));
    assert!(json.contains("/templates/stripe-integration/"));
}

#[test]
fn detail_pages_carry_their_content_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    build_site(dir.path());

    let doc = fs::read_to_string(dir.path().join("docs/what-is-express/index.html")).unwrap();
    assert!(doc.contains("What is Express.js?"));
    assert!(doc.contains("Intro to Express"));
    assert!(doc.contains("Why Choose Express?"));

    // Code payloads are escaped text inside pre/code, never live markup.
    let template =
        fs::read_to_string(dir.path().join("templates/controllers/index.html")).unwrap();
    assert!(template.contains("Basic CRUD Controller"));
    assert!(template.contains("const User = require("));
    assert!(template.contains("&#x27;../models/User&#x27;") || template.contains("'../models/User'"));
}

#[test]
fn list_pages_link_every_entry_in_order() {
    let dir = tempfile::tempdir().unwrap();
    build_site(dir.path());

    let registry = Registry::stock().unwrap();
    let html = fs::read_to_string(dir.path().join("docs/index.html")).unwrap();

    let mut last = 0;
    for entry in registry.collection(Collection::Docs) {
        let href = format!("href=\"/docs/{}/\"", entry.id);
        let pos = html.find(&href).unwrap_or_else(|| panic!("{href} not in docs list"));
        assert!(pos > last, "{} out of order in docs list", entry.id);
        last = pos;
    }
}

#[test]
fn configured_colors_reach_the_generated_pages() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Registry::stock().unwrap();
    let mut config = SiteConfig::default();
    config.colors.accent = "#ff0000".to_string();
    generate::generate(&registry, &config, dir.path()).unwrap();

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("--color-accent: #ff0000"));
}

#[test]
fn concurrent_builds_against_one_registry_do_not_interfere() {
    let registry = std::sync::Arc::new(Registry::stock().unwrap());
    let config = SiteConfig::default();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let registry = std::sync::Arc::clone(&registry);
        let config = config.clone();
        handles.push(std::thread::spawn(move || {
            let dir = tempfile::tempdir().unwrap();
            let manifest = generate::generate(&registry, &config, dir.path()).unwrap();
            assert_eq!(manifest.detail_count(Collection::Docs), 20);
            assert_eq!(manifest.detail_count(Collection::Templates), 9);
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

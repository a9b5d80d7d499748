//! Static site generation.
//!
//! Takes the registry and config and materializes the full site in the
//! output directory. The enumerator decides which detail pages exist:
//! one page per id returned by [`Registry::enumerate_ids`], nothing
//! more, so every valid id resolves to a pre-rendered page and no other
//! detail path is servable.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home page
//! ├── 404.html                   # Not-found page
//! ├── manifest.json              # Build inventory
//! ├── docs/
//! │   ├── index.html             # Docs list
//! │   ├── what-is-express/
//! │   │   └── index.html         # Detail pages, one per doc id
//! │   └── ...
//! └── templates/
//!     ├── index.html             # Templates list
//!     ├── controllers/
//!     │   └── index.html
//!     └── ...
//! ```

use crate::config::SiteConfig;
use crate::registry::Registry;
use crate::render;
use crate::types::Collection;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Machine-readable inventory of a completed build, written to
/// `manifest.json` in the output directory.
#[derive(Debug, Serialize)]
pub struct SiteManifest {
    pub pages: Vec<GeneratedPage>,
}

/// One generated page: its served route and output file.
#[derive(Debug, Serialize)]
pub struct GeneratedPage {
    /// Route the static host serves this page at (e.g. `/docs/jwt-auth/`).
    pub route: String,
    /// Output file path relative to the output directory.
    pub output: String,
    /// Page title, for build reporting.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Collection>,
}

impl SiteManifest {
    /// Count of detail pages generated for one collection.
    pub fn detail_count(&self, collection: Collection) -> usize {
        self.pages
            .iter()
            .filter(|p| p.collection == Some(collection) && p.route != format!("/{}/", collection.slug()))
            .count()
    }
}

/// Render the whole site into `output_dir`.
pub fn generate(
    registry: &Registry,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<SiteManifest, GenerateError> {
    let css = render::stylesheet(config);
    let mut pages = Vec::new();

    fs::create_dir_all(output_dir)?;

    // Home page
    let home = render::render_home(config, &css);
    fs::write(output_dir.join("index.html"), home.into_string())?;
    pages.push(GeneratedPage {
        route: "/".to_string(),
        output: "index.html".to_string(),
        title: config.site.title.clone(),
        collection: None,
    });

    // Site-wide not-found page
    let not_found = render::render_not_found(None, config, &css);
    fs::write(output_dir.join("404.html"), not_found.into_string())?;
    pages.push(GeneratedPage {
        route: "/404".to_string(),
        output: "404.html".to_string(),
        title: "404".to_string(),
        collection: None,
    });

    for collection in [Collection::Docs, Collection::Templates] {
        generate_collection(registry, collection, config, &css, output_dir, &mut pages)?;
    }

    let manifest = SiteManifest { pages };
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(output_dir.join("manifest.json"), json)?;

    Ok(manifest)
}

/// Generate the list page and every enumerated detail page of one collection.
fn generate_collection(
    registry: &Registry,
    collection: Collection,
    config: &SiteConfig,
    css: &str,
    output_dir: &Path,
    pages: &mut Vec<GeneratedPage>,
) -> Result<(), GenerateError> {
    let slug = collection.slug();
    let collection_dir = output_dir.join(slug);
    fs::create_dir_all(&collection_dir)?;

    let list = render::render_list(collection, registry.collection(collection), config, css);
    fs::write(collection_dir.join("index.html"), list.into_string())?;
    pages.push(GeneratedPage {
        route: format!("/{slug}/"),
        output: format!("{slug}/index.html"),
        title: collection.list_title().to_string(),
        collection: Some(collection),
    });

    for id in registry.enumerate_ids(collection) {
        // Enumerated ids always resolve; render_page keeps the not-found
        // fallback anyway so the boundary stays total.
        let page = render::render_page(registry, collection, id, config, css);
        let detail_dir = collection_dir.join(id);
        fs::create_dir_all(&detail_dir)?;
        fs::write(detail_dir.join("index.html"), page.into_string())?;

        let title = registry
            .resolve(collection, id)
            .map(|e| e.title.clone())
            .unwrap_or_else(|| id.to_string());
        pages.push(GeneratedPage {
            route: format!("/{slug}/{id}/"),
            output: format!("{slug}/{id}/index.html"),
            title,
            collection: Some(collection),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_counts_detail_pages_per_collection() {
        let manifest = SiteManifest {
            pages: vec![
                GeneratedPage {
                    route: "/docs/".to_string(),
                    output: "docs/index.html".to_string(),
                    title: "Docs".to_string(),
                    collection: Some(Collection::Docs),
                },
                GeneratedPage {
                    route: "/docs/a/".to_string(),
                    output: "docs/a/index.html".to_string(),
                    title: "A".to_string(),
                    collection: Some(Collection::Docs),
                },
                GeneratedPage {
                    route: "/".to_string(),
                    output: "index.html".to_string(),
                    title: "Home".to_string(),
                    collection: None,
                },
            ],
        };
        assert_eq!(manifest.detail_count(Collection::Docs), 1);
        assert_eq!(manifest.detail_count(Collection::Templates), 0);
    }

    #[test]
    fn manifest_serializes_routes() {
        let manifest = SiteManifest {
            pages: vec![GeneratedPage {
                route: "/docs/jwt-auth/".to_string(),
                output: "docs/jwt-auth/index.html".to_string(),
                title: "Using JSON Web Tokens (JWT)".to_string(),
                collection: Some(Collection::Docs),
            }],
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("/docs/jwt-auth/"));
        assert!(json.contains("\"collection\":\"docs\""));
    }
}

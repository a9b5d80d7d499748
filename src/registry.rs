//! The immutable content registry: lookup and id enumeration.
//!
//! The registry holds the two ordered collections (`docs`, `templates`)
//! for the lifetime of the process. It is constructed exactly once, before
//! anything renders, and never mutated afterwards — any number of readers
//! may resolve against it concurrently without coordination.
//!
//! ## Lookup contract
//!
//! [`Registry::resolve`] is a linear scan for the first entry whose id
//! equals the requested string exactly: case-sensitive, no trimming, no
//! normalization. Ids are unique within a collection, so first match and
//! only match coincide. Uniqueness is enforced at construction
//! ([`Registry::new`] rejects duplicates) rather than silently shadowing
//! a later entry.
//!
//! [`Registry::enumerate_ids`] returns every id in a collection, in
//! collection order. Its output is exactly the domain over which
//! `resolve` succeeds: every enumerated id resolves, and every id that
//! resolves is enumerated. The build pipeline relies on this to
//! materialize one detail page per id and nothing else.

use crate::content;
use crate::types::{Collection, ContentEntry};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate id \"{id}\" in {collection} collection")]
    DuplicateId { collection: &'static str, id: String },
}

/// Process-lifetime, read-only store of all content entries.
#[derive(Debug)]
pub struct Registry {
    docs: Vec<ContentEntry>,
    templates: Vec<ContentEntry>,
}

impl Registry {
    /// Build a registry from two ordered collections, failing fast if any
    /// collection contains a duplicate id.
    pub fn new(
        docs: Vec<ContentEntry>,
        templates: Vec<ContentEntry>,
    ) -> Result<Self, RegistryError> {
        check_unique_ids("docs", &docs)?;
        check_unique_ids("templates", &templates)?;
        Ok(Self { docs, templates })
    }

    /// Build the registry from the compiled-in ExpressKit content set.
    pub fn stock() -> Result<Self, RegistryError> {
        Self::new(content::docs(), content::templates())
    }

    /// The ordered entries of one collection.
    pub fn collection(&self, collection: Collection) -> &[ContentEntry] {
        match collection {
            Collection::Docs => &self.docs,
            Collection::Templates => &self.templates,
        }
    }

    /// Look up an entry by id. Returns `None` when no entry matches; a
    /// malformed or empty id is just a non-matching string, not a
    /// distinct error.
    pub fn resolve(&self, collection: Collection, id: &str) -> Option<&ContentEntry> {
        self.collection(collection).iter().find(|e| e.id == id)
    }

    /// All ids in a collection, in collection order.
    ///
    /// Ids are unique by construction, so the returned vector is a set.
    pub fn enumerate_ids(&self, collection: Collection) -> Vec<&str> {
        self.collection(collection)
            .iter()
            .map(|e| e.id.as_str())
            .collect()
    }
}

fn check_unique_ids(
    collection: &'static str,
    entries: &[ContentEntry],
) -> Result<(), RegistryError> {
    let mut seen = std::collections::HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(RegistryError::DuplicateId {
                collection,
                id: entry.id.clone(),
            });
        }
    }
    Ok(())
}

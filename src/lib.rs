//! # ExpressKit
//!
//! A static site generator for the ExpressKit website: an Express.js
//! documentation browser and code-template gallery. The content is the
//! binary — two compiled-in collections of entries — and a build
//! pre-renders every page the site can serve.
//!
//! # Architecture: Registry → Resolve → Render
//!
//! ```text
//! 1. Registry   compiled-in content  →  immutable Registry   (built once, read-only)
//! 2. Enumerate  Registry             →  set of detail ids    (which pages exist)
//! 3. Render     (collection, id)     →  dist/                (final HTML site)
//! ```
//!
//! The enumeration/resolution contract is the load-bearing piece: the id
//! set returned by [`registry::Registry::enumerate_ids`] is exactly the
//! domain over which [`registry::Registry::resolve`] succeeds. The build
//! pipeline generates one detail page per enumerated id, so every valid
//! id is servable as a pre-rendered page and nothing else is.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared content types (`ContentEntry`, `Section`, `Collection`) |
//! | [`content`] | The compiled-in data set: 20 docs, 9 templates |
//! | [`registry`] | Immutable registry — lookup, id enumeration, duplicate-id rejection |
//! | [`render`] | Maud page renderers: home, list, detail, not-found |
//! | [`generate`] | Build pipeline — writes the full site and its manifest |
//! | [`config`] | `config.toml` loading, validation, and color CSS generation |
//! | [`output`] | CLI output formatting — inventory and build reports |
//!
//! # Design Decisions
//!
//! ## Content as Code
//!
//! The registry is constructed from Rust source, not loaded from files.
//! A ~30-entry content set changes rarely and ships with the tool; making
//! it code means the type checker validates every entry, the binary can
//! never be missing its data, and registry construction needs no I/O.
//! Duplicate ids are rejected when the registry is built, before anything
//! renders.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed HTML is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped — which is
//! exactly the contract the code payloads need: stored verbatim, displayed
//! verbatim, never interpreted as markup.
//!
//! ## NotFound Is an Outcome, Not an Error
//!
//! Lookup returns `Option`; the render boundary maps a miss to the 404
//! view and that is the end of it. Error enums are reserved for faults
//! that should stop a build: I/O failures, bad config, duplicate ids.
//!
//! ## Everything Pre-Rendered
//!
//! The generated site is plain HTML with inline CSS — no JavaScript, no
//! server, no database. Any static file host can serve it.

pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod registry;
pub mod render;
pub mod types;

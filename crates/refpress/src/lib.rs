//! # refpress
//!
//! Static API-reference site generator.
//!
//! Reads structured content files (one YAML file per documentation module,
//! each an ordered list of entry records: symbol name, prose summary,
//! preformatted signature, parameter list), validates them, and renders one
//! complete HTML page per module inside a shared page shell.
//!
//! ## Modules
//!
//! - [`schema`] — Parse and validate YAML module files
//! - [`config`] — Site chrome configuration (name, nav, asset paths)
//! - [`render`] — Page shell and content-block rendering
//! - [`assemble`] — Compose complete pages, fail-fast across a site
//! - [`site`] — Load content directories, write pages to disk
//! - [`index`] — Maintain the marker-delimited module list in an index page
//! - [`escape`] — HTML text/attribute escaping

pub mod assemble;
pub mod config;
pub mod error;
pub mod escape;
pub mod index;
pub mod render;
pub mod schema;
pub mod site;

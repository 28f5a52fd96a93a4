//! `ruledocs_core` regenerates the markdown documentation pages of a lint
//! rule plugin from the rules' own metadata.
//!
//! ## Processing Pipeline
//!
//! ```text
//! ruledocs.toml + rule manifest
//!   → DocsContext (config, rules in registry order)
//!   → for each rule: read <docs_dir>/<name>.md, normalize to LF
//!   → header → footer → code block attributes → front-matter → code block spacing
//!   → write back with the configured line ending
//! ```
//!
//! Each step is a pure function of the page text and the rule, listed in
//! [`transform::PIPELINE`].
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `ruledocs.toml`: link templates, preset labels and inheritance, front-matter values, and line endings.
//! - [`registry`] — Loading rule descriptors from a JSON, TOML, or YAML manifest.
//! - [`transform`] — The text rewrites applied to each page.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ruledocs_core::check_docs;
//! use ruledocs_core::load_context;
//! use ruledocs_core::update_docs;
//! use std::path::Path;
//!
//! let ctx = load_context(Path::new(".")).unwrap();
//!
//! let result = check_docs(&ctx).unwrap();
//! if !result.is_ok() {
//!     eprintln!("{} page(s) out of date", result.stale.len());
//! }
//!
//! let updates = update_docs(&ctx).unwrap();
//! println!("updated {} page(s)", updates.updated_count());
//! ```

pub use config::*;
pub use document::*;
pub use error::*;
pub use rule::*;

pub mod config;
mod document;
#[allow(unused_assignments)]
mod error;
pub mod registry;
mod rule;
pub mod transform;

#[cfg(test)]
mod __fixtures;

//! `drawgen_core` is the library behind the `drawgen` code-generation helper.
//! It scans a Unity project for builder `ScriptableObject` sources and emits
//! one `CustomPropertyDrawer` registration stub per builder, filled from a
//! fixed template.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source subdirectories
//!   → Scanner (walks each tree, collects builder base names in order)
//!   → Generator (derives the built-object name, fills the template,
//!     writes one drawer stub per builder into the output directory)
//! ```
//!
//! Scanning completes fully before any generation begins. Generation is
//! strictly sequential; existing stubs are overwritten unconditionally, so
//! rerunning with unchanged sources produces byte-identical output.
//!
//! ## Modules
//!
//! - [`config`]: Configuration defaults and `drawgen.toml` loading.
//! - [`scanner`]: Source-tree traversal and builder-name collection.
//! - [`generator`]: Name derivation, template filling, and file emission.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use drawgen_core::DrawgenConfig;
//! use drawgen_core::collect_names;
//! use drawgen_core::generate;
//!
//! let root = Path::new(".");
//! let config = DrawgenConfig::resolve(root).unwrap();
//! let names = collect_names(root, &config).unwrap();
//! generate(root, &config, &names, |file| {
//! 	println!("{} -> {}", file.object, file.path);
//! })
//! .unwrap();
//! ```

pub use config::*;
pub use error::*;
pub use generator::*;
pub use scanner::*;

pub mod config;
mod error;
pub mod generator;
pub mod scanner;

#[cfg(test)]
mod __tests;

//! # RAML Resolver
//!
//! Application layer on top of [`raml_model`]: reads YAML documents into the
//! model and renders resolution results for the `raml-resolve` binary.
//!
//! - [`loader`]: YAML binding (`load_str`, `load_path`, `load_applied`).
//! - [`render`]: text output used by the command line.

pub mod loader;
pub mod render;

pub use loader::{load_applied, load_path, load_str, LoadError};
pub use raml_model;

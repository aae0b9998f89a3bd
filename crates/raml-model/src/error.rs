//! # Model Errors
//!
//! This module defines the error type shared by the whole model crate.
//! Every failure is fatal for the document it came from: there is no retry and
//! no partial result, the caller reports the document as invalid upstream.
//!
//! A path that resolves to nothing is *not* an error. [`Raml::resolve`](crate::Raml::resolve)
//! returns `Ok(None)` for that case.

use thiserror::Error;

/// Result alias used throughout the model crate.
pub type Result<T> = std::result::Result<T, RamlError>;

/// Errors raised while resolving paths or applying traits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RamlError {
    /// The document's `baseUri` is not a well-formed URL.
    ///
    /// Raised lazily, the first time the base URI path is needed.
    #[error("Invalid base URI {base_uri:?}: {reason}")]
    InvalidBaseUri { base_uri: String, reason: String },

    /// A resource's `use` list names a trait that is not in the catalog.
    #[error("Missing trait {name:?} referenced by resource {resource}")]
    MissingTrait { name: String, resource: String },

    /// An action-kind token outside the closed action registry.
    #[error("Invalid action type: {0:?}")]
    InvalidActionType(String),
}

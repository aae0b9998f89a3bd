//! Error types for the document loader.

use raml_model::RamlError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while binding a document into the model.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML, or a node has the wrong shape.
    #[error("Malformed document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document binds, but the model rejects it (e.g. an unknown action key).
    #[error(transparent)]
    Model(#[from] RamlError),
}

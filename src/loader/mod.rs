//! # Document Loader
//!
//! Binds a YAML document into a [`Raml`] model. Binding is structural only:
//! field names, nesting and defaults. Nothing here checks that the document
//! makes sense as an API description beyond what the model itself rejects.
//!
//! ```yaml
//! title: Users API
//! baseUri: http://api.example.com/v1
//! traits:
//!   paged:
//!     provides:
//!       get?:
//!         queryParameters:
//!           page: { type: integer }
//! /users:
//!   use: [paged]
//!   get:
//!   /{id}:
//!     get:
//! ```
//!
//! Top-level keys starting with `/` are resources. Inside a resource, keys
//! starting with `/` are children and every other unknown key must be an action
//! kind; an empty (`null`) action is an action with no details.

mod error;
mod raw;

pub use error::LoadError;

use raml_model::{Action, ActionType, Raml, Resource, Trait};
use raw::{RawRaml, RawResource, RawTrait};
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::Path;
use tracing::{debug, info};

/// Parses a document from a YAML string. Traits are *not* applied.
pub fn load_str(yaml: &str) -> Result<Raml, LoadError> {
    let raw: RawRaml = serde_yaml::from_str(yaml)?;
    let raml = convert(raw)?;
    info!(
        title = %raml.title,
        resources = raml.resource_count(),
        traits = raml.traits().len(),
        "Document loaded"
    );
    Ok(raml)
}

/// Reads and parses a document file. Traits are *not* applied.
pub fn load_path(path: impl AsRef<Path>) -> Result<Raml, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading document");
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&content)
}

/// Parses a document and applies its traits, ready for resolution.
pub fn load_applied(yaml: &str) -> Result<Raml, LoadError> {
    let mut raml = load_str(yaml)?;
    raml.apply_traits()?;
    Ok(raml)
}

/// Deserializes a node, treating an empty node as the default value.
fn from_node<T: DeserializeOwned + Default>(value: Value) -> Result<T, LoadError> {
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_yaml::from_value(value)?)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn convert(raw: RawRaml) -> Result<Raml, LoadError> {
    let mut raml = Raml::new(raw.title, raw.base_uri);
    raml.version = raw.version.and_then(scalar_to_string);
    raml.uri_parameters = raw.uri_parameters;
    raml.documentation = raw.documentation;

    for (name, raw_trait) in raw.traits {
        let t = convert_trait(name, raw_trait.unwrap_or_default())?;
        raml.add_trait(t);
    }

    for (key, value) in raw.rest {
        if key.starts_with('/') {
            let resource = convert_resource(key, from_node(value)?)?;
            raml.add_resource(resource);
        } else {
            debug!(key = %key, "Ignoring top-level key");
        }
    }
    Ok(raml)
}

fn convert_trait(name: String, raw: RawTrait) -> Result<Trait, LoadError> {
    let mut t = Trait::new(name);
    t.display_name = raw.display_name;
    t.description = raw.description;
    for (token, value) in raw.provides {
        t = t.provides(token, from_node::<Action>(value)?);
    }
    Ok(t)
}

fn convert_resource(relative_uri: String, raw: RawResource) -> Result<Resource, LoadError> {
    let mut resource = Resource::new(relative_uri);
    resource.display_name = raw.display_name;
    resource.description = raw.description;
    resource.uri_parameters = raw.uri_parameters;
    for name in raw.uses {
        resource = resource.with_use(name);
    }

    for (key, value) in raw.rest {
        if key.starts_with('/') {
            let child = convert_resource(key, from_node(value)?)?;
            resource.add_child(child);
        } else {
            let kind = ActionType::parse(&key)?;
            resource = resource.with_action(kind, from_node(value)?);
        }
    }
    Ok(resource)
}

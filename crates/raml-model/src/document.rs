//! # Document Root
//!
//! [`Raml`] owns everything a document declares: the base URI, the trait
//! catalog and the top-level resources. It is the entry point for both
//! algorithms:
//!
//! - [`Raml::apply_traits`] mixes the catalog into every resource (call once).
//! - [`Raml::resolve`] maps a request path to the resource that declares it.
//!
//! ## Base URI handling
//!
//! `resolve` accepts fully-qualified paths (`http://api.example.com/v1/users`),
//! host-relative paths (`/v1/users`) and paths already relative to the base
//! (`/users`). The base URI is only parsed when it is needed, so a malformed
//! one surfaces as [`RamlError::InvalidBaseUri`] on first use rather than at
//! construction.

use crate::apply::{self, ApplyReport};
use crate::error::{RamlError, Result};
use crate::parameter::{DocumentationItem, UriParameter};
use crate::resource::{self, Resource, ResourceMap};
use crate::traits::{Trait, TraitCatalog};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use url::Url;

/// A resolved API description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Raml {
    pub title: String,
    pub version: Option<String>,
    base_uri: String,
    pub uri_parameters: BTreeMap<String, UriParameter>,
    resources: ResourceMap,
    traits: TraitCatalog,
    pub documentation: Vec<DocumentationItem>,
}

impl Raml {
    pub fn new(title: impl Into<String>, base_uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            base_uri: base_uri.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_uri_parameter(mut self, name: impl Into<String>, parameter: UriParameter) -> Self {
        self.uri_parameters.insert(name.into(), parameter);
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.add_resource(resource);
        self
    }

    pub fn with_trait(mut self, t: Trait) -> Self {
        self.add_trait(t);
        self
    }

    pub fn with_documentation(mut self, item: DocumentationItem) -> Self {
        self.documentation.push(item);
        self
    }

    /// Adds a top-level resource, keyed by its relative URI.
    pub fn add_resource(&mut self, mut resource: Resource) {
        resource.rebase("");
        self.resources
            .insert(resource.relative_uri().to_string(), resource);
    }

    /// Adds a trait to the catalog, keyed by its name.
    pub fn add_trait(&mut self, t: Trait) {
        self.traits.insert(t.name.clone(), t);
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn resources(&self) -> &ResourceMap {
        &self.resources
    }

    pub fn traits(&self) -> &TraitCatalog {
        &self.traits
    }

    pub fn trait_named(&self, name: &str) -> Option<&Trait> {
        self.traits.get(name)
    }

    /// Path component of the base URI, percent-decoded.
    ///
    /// `http://api.example.com/{version}` yields `/{version}`. A base URI
    /// without a path yields `/`.
    pub fn base_path(&self) -> Result<String> {
        let invalid = |reason: String| RamlError::InvalidBaseUri {
            base_uri: self.base_uri.clone(),
            reason,
        };
        let url = Url::parse(&self.base_uri).map_err(|e| invalid(e.to_string()))?;
        let path = urlencoding::decode(url.path()).map_err(|e| invalid(e.to_string()))?;
        Ok(path.into_owned())
    }

    /// Strips the base URI, then its path component, from `path`.
    fn relative_path<'p>(&self, path: &'p str) -> Result<&'p str> {
        let base_uri = self.base_uri.trim_end_matches('/');
        let path = path.strip_prefix(base_uri).unwrap_or(path);

        let base_path = self.base_path()?;
        let base_path = base_path.trim_end_matches('/');
        if base_path.is_empty() {
            return Ok(path);
        }
        Ok(match path.strip_prefix(base_path) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        })
    }

    /// Finds the resource whose full path matches `path` exactly.
    ///
    /// Returns `Ok(None)` when nothing matches.
    pub fn resolve(&self, path: &str) -> Result<Option<&Resource>> {
        let relative = self.relative_path(path).inspect_err(|e| {
            warn!(error = %e, "Cannot resolve against base URI");
        })?;
        let found = resource::find_in(&self.resources, relative);
        debug!(path, relative, found = found.is_some(), "Resolve");
        Ok(found)
    }

    /// Same as [`Raml::resolve`], with a mutable borrow of the match.
    pub fn resolve_mut(&mut self, path: &str) -> Result<Option<&mut Resource>> {
        let relative = self.relative_path(path)?.to_string();
        Ok(resource::find_in_mut(&mut self.resources, &relative))
    }

    /// Mixes the trait catalog into every resource of the tree.
    ///
    /// Must be called exactly once, after the tree is complete and before any
    /// [`Raml::resolve`] result is relied on. On error the tree is unchanged.
    pub fn apply_traits(&mut self) -> Result<ApplyReport> {
        let Self {
            resources, traits, ..
        } = self;
        apply::apply_traits(resources, traits)
    }

    /// Visits every resource depth-first, in key order.
    pub fn walk<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Resource),
    {
        for resource in self.resources.values() {
            resource.walk(&mut f);
        }
    }

    /// Number of resources in the whole tree.
    pub fn resource_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_| count += 1);
        count
    }
}

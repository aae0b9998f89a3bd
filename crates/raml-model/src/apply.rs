//! # Trait Application
//!
//! Mixes trait fragments into the actions of every resource in a tree.
//!
//! For each resource the *working set* of action kinds is the union of the kinds
//! the resource declares and every kind some trait in the catalog provides
//! without the `?` marker. The resource's `use` list is then walked in reverse,
//! and each referenced trait merges its fragment for every kind in the working
//! set. Because later merges overwrite earlier ones, walking in reverse means the
//! first trait listed in `use` has the last word.
//!
//! The whole tree and the catalog are validated before anything is mutated, so
//! an error leaves the tree exactly as it was.

use crate::action::{Action, ActionType};
use crate::error::{RamlError, Result};
use crate::resource::{Resource, ResourceMap};
use crate::traits::TraitCatalog;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Summary of one application pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Resources visited (every node of the tree, once).
    pub resources_visited: usize,
    /// Fragment merges performed across the tree.
    pub fragments_merged: usize,
}

/// Catalog with every `provides` token already parsed.
struct ParsedCatalog<'c> {
    fragments: BTreeMap<&'c str, BTreeMap<ActionType, &'c Action>>,
    unconditional: BTreeSet<ActionType>,
}

impl<'c> ParsedCatalog<'c> {
    fn parse(catalog: &'c TraitCatalog) -> Result<Self> {
        let mut fragments = BTreeMap::new();
        let mut unconditional = BTreeSet::new();
        for (name, t) in catalog {
            fragments.insert(name.as_str(), t.fragments()?);
            unconditional.extend(t.unconditional_kinds()?);
        }
        Ok(Self {
            fragments,
            unconditional,
        })
    }
}

/// Applies `catalog` to every resource in `resources`, recursively.
///
/// Call exactly once, after the tree is fully built.
pub fn apply_traits(resources: &mut ResourceMap, catalog: &TraitCatalog) -> Result<ApplyReport> {
    let parsed = ParsedCatalog::parse(catalog).inspect_err(|e| {
        warn!(error = %e, "Trait catalog rejected");
    })?;
    debug!(
        traits = catalog.len(),
        unconditional = ?parsed.unconditional,
        "Applying traits"
    );

    for resource in resources.values() {
        validate(resource, &parsed).inspect_err(|e| {
            warn!(error = %e, "Trait application aborted");
        })?;
    }

    let mut report = ApplyReport::default();
    for resource in resources.values_mut() {
        apply_to(resource, &parsed, &mut report);
    }
    info!(
        resources = report.resources_visited,
        merged = report.fragments_merged,
        "Traits applied"
    );
    Ok(report)
}

fn validate(resource: &Resource, parsed: &ParsedCatalog<'_>) -> Result<()> {
    if let Some(name) = resource
        .uses()
        .iter()
        .find(|name| !parsed.fragments.contains_key(name.as_str()))
    {
        return Err(RamlError::MissingTrait {
            name: name.clone(),
            resource: resource.uri(),
        });
    }
    resource
        .resources()
        .values()
        .try_for_each(|child| validate(child, parsed))
}

fn apply_to(resource: &mut Resource, parsed: &ParsedCatalog<'_>, report: &mut ApplyReport) {
    let working_set: BTreeSet<ActionType> = resource
        .actions
        .keys()
        .copied()
        .chain(parsed.unconditional.iter().copied())
        .collect();

    let uses = resource.uses().to_vec();
    for name in uses.iter().rev() {
        // validate() has already checked every name
        let Some(fragments) = parsed.fragments.get(name.as_str()) else {
            continue;
        };
        for kind in &working_set {
            if let Some(fragment) = fragments.get(kind) {
                resource.actions.entry(*kind).or_default().merge(fragment);
                report.fragments_merged += 1;
                debug!(resource = %resource.uri(), trait_name = %name, %kind, "Merged");
            }
        }
    }
    report.resources_visited += 1;

    for child in resource.resources_mut().values_mut() {
        apply_to(child, parsed, report);
    }
}

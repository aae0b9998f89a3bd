//! Reusable action fragments ("traits") and the catalog that holds them.

use crate::action::{Action, ActionType};
use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};

/// All traits declared by a document, keyed by name.
pub type TraitCatalog = BTreeMap<String, Trait>;

/// A named bundle of action fragments.
///
/// `provides` keeps the raw tokens from the document. A token with a trailing
/// `?` (e.g. `get?`) is conditional: it only reaches resources whose working
/// action set already contains that kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trait {
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub provides: BTreeMap<String, Action>,
}

/// One parsed `provides` entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Provision<'a> {
    pub kind: ActionType,
    pub conditional: bool,
    pub fragment: &'a Action,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Adds a fragment under a raw token such as `"get"` or `"get?"`.
    pub fn provides(mut self, token: impl Into<String>, fragment: Action) -> Self {
        self.provides.insert(token.into(), fragment);
        self
    }

    /// Parses every `provides` token through the action registry.
    pub fn provisions(&self) -> Result<Vec<Provision<'_>>> {
        self.provides
            .iter()
            .map(|(token, fragment)| {
                let (kind, conditional) = ActionType::parse_token(token)?;
                Ok(Provision {
                    kind,
                    conditional,
                    fragment,
                })
            })
            .collect()
    }

    /// The fragment contributed per action kind.
    ///
    /// When a trait lists both `get` and `get?`, the plain entry wins.
    pub fn fragments(&self) -> Result<BTreeMap<ActionType, &Action>> {
        let mut fragments = BTreeMap::new();
        for provision in self.provisions()? {
            if provision.conditional && fragments.contains_key(&provision.kind) {
                continue;
            }
            fragments.insert(provision.kind, provision.fragment);
        }
        Ok(fragments)
    }

    /// Kinds this trait provides without the conditional marker.
    pub fn unconditional_kinds(&self) -> Result<BTreeSet<ActionType>> {
        Ok(self
            .provisions()?
            .into_iter()
            .filter(|p| !p.conditional)
            .map(|p| p.kind)
            .collect())
    }
}

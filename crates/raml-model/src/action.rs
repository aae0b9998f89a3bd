//! # Action Registry
//!
//! [`ActionType`] is the closed set of operation kinds a resource may support.
//! Tokens coming from a document are parsed case-insensitively and canonicalized
//! to upper case; anything outside the set is rejected with
//! [`RamlError::InvalidActionType`].
//!
//! [`Action`] is the payload stored per kind. The resolver never looks inside
//! it except to merge trait fragments (see [`Action::merge`]).

use crate::error::{RamlError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::str::FromStr;

/// Suffix marking a trait-provided entry as conditional.
pub const CONDITIONAL_MARKER: char = '?';

/// Supported action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
    Options,
    Trace,
    Connect,
}

impl ActionType {
    /// Every action kind, in declaration order.
    pub const ALL: [ActionType; 9] = [
        ActionType::Get,
        ActionType::Post,
        ActionType::Put,
        ActionType::Delete,
        ActionType::Head,
        ActionType::Patch,
        ActionType::Options,
        ActionType::Trace,
        ActionType::Connect,
    ];

    /// Canonical (upper-case) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
        }
    }

    /// Lower-case key as written in documents.
    pub fn document_key(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Options => "options",
            Self::Trace => "trace",
            Self::Connect => "connect",
        }
    }

    /// Parses a bare action-kind token, ignoring case.
    pub fn parse(token: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| RamlError::InvalidActionType(token.to_string()))
    }

    /// Parses a trait `provides` key.
    ///
    /// Returns the action kind and whether the key carried the conditional
    /// `?` suffix (`"get?"` → `(Get, true)`).
    pub fn parse_token(token: &str) -> Result<(Self, bool)> {
        match token.strip_suffix(CONDITIONAL_MARKER) {
            Some(bare) => Self::parse(bare)
                .map(|kind| (kind, true))
                .map_err(|_| RamlError::InvalidActionType(token.to_string())),
            None => Self::parse(token).map(|kind| (kind, false)),
        }
    }
}

impl FromStr for ActionType {
    type Err = RamlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of one action on a resource, or a fragment of one provided by a trait.
///
/// The mappings are kept opaque; they carry headers, query parameters, bodies
/// (keyed by media type) and responses (keyed by status code) exactly as the
/// document wrote them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub headers: Mapping,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub query_parameters: Mapping,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub body: Mapping,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub responses: Mapping,
}

impl Action {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(Value::String(name.into()), value.into());
        self
    }

    pub fn with_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.query_parameters
            .insert(Value::String(name.into()), value.into());
        self
    }

    pub fn with_body(mut self, media_type: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(Value::String(media_type.into()), value.into());
        self
    }

    pub fn with_response(mut self, code: u16, value: impl Into<Value>) -> Self {
        self.responses.insert(Value::from(code), value.into());
        self
    }

    /// Merges a trait fragment into this action.
    ///
    /// The fragment's description replaces ours when present. Every entry of the
    /// fragment's mappings is inserted, overwriting an entry with the same key.
    /// Entries the fragment does not mention are kept.
    pub fn merge(&mut self, fragment: &Action) {
        if let Some(description) = &fragment.description {
            self.description = Some(description.clone());
        }
        merge_mapping(&mut self.headers, &fragment.headers);
        merge_mapping(&mut self.query_parameters, &fragment.query_parameters);
        merge_mapping(&mut self.body, &fragment.body);
        merge_mapping(&mut self.responses, &fragment.responses);
    }
}

fn merge_mapping(target: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

//! Passive value types carried by the model: URI parameters and documentation entries.
//!
//! Nothing in the resolver reads these; they are stored so consumers get the
//! whole document back.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Primitive type of a URI parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Number,
    Integer,
    Date,
    Boolean,
    File,
}

/// Declaration of a `{placeholder}` in a base URI or relative URI.
///
/// `default`, `example` and `enum` keep the document's scalars as written, so
/// `example: 5` on an integer parameter stays a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UriParameter {
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<Value>,
    pub example: Option<Value>,
    #[serde(rename = "enum")]
    pub enum_values: Vec<Value>,
    pub pattern: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

impl Default for UriParameter {
    /// URI parameters are required unless the document says otherwise.
    fn default() -> Self {
        Self {
            display_name: None,
            description: None,
            param_type: ParamType::default(),
            required: true,
            default: None,
            example: None,
            enum_values: Vec::new(),
            pattern: None,
            min_length: None,
            max_length: None,
        }
    }
}

/// One `title`/`content` pair from the `documentation` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationItem {
    pub title: String,
    pub content: String,
}

impl DocumentationItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

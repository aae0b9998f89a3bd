//! YAML shapes as they appear in a document.
//!
//! Resources and actions share one mapping in the source format, so the known
//! keys are bound by name and everything else lands in `rest` for the loader
//! to sort into child resources (`/...`) and actions (`get`, `post`, ...).

use raml_model::{DocumentationItem, UriParameter};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawRaml {
    pub title: String,
    #[serde(default)]
    pub version: Option<Value>,
    pub base_uri: String,
    #[serde(default)]
    pub uri_parameters: BTreeMap<String, UriParameter>,
    #[serde(default)]
    pub traits: BTreeMap<String, Option<RawTrait>>,
    #[serde(default)]
    pub documentation: Vec<DocumentationItem>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawResource {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uri_parameters: BTreeMap<String, UriParameter>,
    #[serde(default, rename = "use")]
    pub uses: Vec<String>,
    #[serde(flatten)]
    pub rest: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawTrait {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub provides: BTreeMap<String, Value>,
}

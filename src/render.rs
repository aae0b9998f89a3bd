//! Plain-text rendering of a resolved model for the command line.

use raml_model::{Raml, Resource};
use std::fmt::Write;

/// Action kinds of a resource, e.g. `GET, POST`.
pub fn action_list(resource: &Resource) -> String {
    let kinds: Vec<&str> = resource.actions().keys().map(|k| k.as_str()).collect();
    if kinds.is_empty() {
        "-".to_string()
    } else {
        kinds.join(", ")
    }
}

/// One line per resource, indented by depth.
pub fn render_tree(raml: &Raml) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", raml.title, raml.base_uri());
    for resource in raml.resources().values() {
        render_node(resource, 1, &mut out);
    }
    out
}

fn render_node(resource: &Resource, depth: usize, out: &mut String) {
    let _ = writeln!(
        out,
        "{:indent$}{} [{}]",
        "",
        resource.relative_uri(),
        action_list(resource),
        indent = depth * 2
    );
    for child in resource.resources().values() {
        render_node(child, depth + 1, out);
    }
}

/// Result line for one `resolve` query.
pub fn render_resolution(path: &str, found: Option<&Resource>) -> String {
    match found {
        Some(resource) => format!("{path} -> {} [{}]", resource.uri(), action_list(resource)),
        None => format!("{path} -> not found"),
    }
}

//! # Resource Tree
//!
//! A [`Resource`] is one node of the API tree. It owns its children outright,
//! keyed by their relative URI, so the tree has no parent pointers and no shared
//! state. Each node remembers the cumulative URI of its parent (`parent_uri`),
//! which is rebased whenever a subtree is attached somewhere else.
//!
//! Lookup is a prefix descent: at every level the remaining path is tested
//! against each sibling's relative URI, and a match must end either at the end
//! of the path or right before a `/`.

use crate::action::{Action, ActionType};
use crate::parameter::UriParameter;
use std::collections::BTreeMap;

/// Child resources keyed by relative URI.
pub type ResourceMap = BTreeMap<String, Resource>;

/// An addressable node in the API tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    relative_uri: String,
    parent_uri: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub uri_parameters: BTreeMap<String, UriParameter>,
    pub(crate) actions: BTreeMap<ActionType, Action>,
    uses: Vec<String>,
    resources: ResourceMap,
}

impl Resource {
    /// Creates a detached resource for the given relative URI (e.g. `/users`).
    pub fn new(relative_uri: impl Into<String>) -> Self {
        Self {
            relative_uri: relative_uri.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_uri_parameter(mut self, name: impl Into<String>, parameter: UriParameter) -> Self {
        self.uri_parameters.insert(name.into(), parameter);
        self
    }

    pub fn with_action(mut self, kind: ActionType, action: Action) -> Self {
        self.actions.insert(kind, action);
        self
    }

    /// Appends a trait reference to the `use` list.
    pub fn with_use(mut self, trait_name: impl Into<String>) -> Self {
        self.uses.push(trait_name.into());
        self
    }

    pub fn with_child(mut self, child: Resource) -> Self {
        self.add_child(child);
        self
    }

    /// Attaches a child, rebasing its subtree under this node's URI.
    pub fn add_child(&mut self, mut child: Resource) {
        child.rebase(&self.uri());
        self.resources.insert(child.relative_uri.clone(), child);
    }

    /// Sets the parent URI of this node and fixes up every descendant.
    pub(crate) fn rebase(&mut self, parent_uri: &str) {
        self.parent_uri = parent_uri.to_string();
        let uri = self.uri();
        for child in self.resources.values_mut() {
            child.rebase(&uri);
        }
    }

    pub fn relative_uri(&self) -> &str {
        &self.relative_uri
    }

    pub fn parent_uri(&self) -> &str {
        &self.parent_uri
    }

    /// Full path of this node relative to the base URI.
    pub fn uri(&self) -> String {
        format!("{}{}", self.parent_uri, self.relative_uri)
    }

    pub fn actions(&self) -> &BTreeMap<ActionType, Action> {
        &self.actions
    }

    pub fn action(&self, kind: ActionType) -> Option<&Action> {
        self.actions.get(&kind)
    }

    pub fn has_action(&self, kind: ActionType) -> bool {
        self.actions.contains_key(&kind)
    }

    /// Trait names to mix in, in declaration order.
    pub fn uses(&self) -> &[String] {
        &self.uses
    }

    pub fn resources(&self) -> &ResourceMap {
        &self.resources
    }

    pub(crate) fn resources_mut(&mut self) -> &mut ResourceMap {
        &mut self.resources
    }

    /// Finds a descendant by a path relative to this node (e.g. `/{id}/orders`).
    pub fn resource(&self, path: &str) -> Option<&Resource> {
        find_in(&self.resources, path)
    }

    pub fn resource_mut(&mut self, path: &str) -> Option<&mut Resource> {
        find_in_mut(&mut self.resources, path)
    }

    /// Visits this node and every descendant, depth-first in key order.
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Resource),
    {
        f(self);
        for child in self.resources.values() {
            child.walk(f);
        }
    }
}

/// How a candidate path relates to a node's relative URI.
enum Step<'p> {
    Exact,
    Descend(&'p str),
    Miss,
}

fn step<'p>(relative_uri: &str, path: &'p str) -> Step<'p> {
    match path.strip_prefix(relative_uri) {
        Some("") => Step::Exact,
        Some(rest) if rest.starts_with('/') => Step::Descend(rest),
        _ => Step::Miss,
    }
}

/// Prefix descent over a sibling map.
///
/// A candidate that passes the boundary test but whose subtree has no match
/// does not end the scan; the remaining siblings are still tried.
pub(crate) fn find_in<'a>(resources: &'a ResourceMap, path: &str) -> Option<&'a Resource> {
    resources
        .values()
        .find_map(|resource| match step(&resource.relative_uri, path) {
            Step::Exact => Some(resource),
            Step::Descend(rest) => find_in(&resource.resources, rest),
            Step::Miss => None,
        })
}

pub(crate) fn find_in_mut<'a>(
    resources: &'a mut ResourceMap,
    path: &str,
) -> Option<&'a mut Resource> {
    for resource in resources.values_mut() {
        match step(&resource.relative_uri, path) {
            Step::Exact => return Some(resource),
            Step::Descend(rest) => {
                if let Some(found) = find_in_mut(&mut resource.resources, rest) {
                    return Some(found);
                }
            }
            Step::Miss => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Resource {
        Resource::new("/users")
            .with_action(ActionType::Get, Action::new())
            .with_child(
                Resource::new("/{id}")
                    .with_action(ActionType::Get, Action::new())
                    .with_child(Resource::new("/orders")),
            )
    }

    #[test]
    fn test_child_uris_are_cumulative() {
        let users = users();
        let orders = users.resource("/{id}/orders").unwrap();
        assert_eq!(orders.relative_uri(), "/orders");
        assert_eq!(orders.parent_uri(), "/users/{id}");
        assert_eq!(orders.uri(), "/users/{id}/orders");
    }

    #[test]
    fn test_rebase_fixes_whole_subtree() {
        let api = Resource::new("/api").with_child(users());
        let orders = api.resource("/users/{id}/orders").unwrap();
        assert_eq!(orders.uri(), "/api/users/{id}/orders");
    }

    #[test]
    fn test_lookup_requires_segment_boundary() {
        let root = Resource::new("")
            .with_child(Resource::new("/use"))
            .with_child(Resource::new("/users"));

        assert_eq!(root.resource("/users").unwrap().relative_uri(), "/users");
        assert_eq!(root.resource("/use").unwrap().relative_uri(), "/use");
        assert!(root.resource("/user").is_none());
        assert!(root.resource("/usersX").is_none());
    }

    #[test]
    fn test_lookup_keeps_scanning_after_dead_end() {
        let root = Resource::new("")
            .with_child(Resource::new("/a"))
            .with_child(Resource::new("/a/b"));

        assert_eq!(root.resource("/a/b").unwrap().relative_uri(), "/a/b");
    }

    #[test]
    fn test_resource_mut_allows_edits() {
        let mut users = users();
        users
            .resource_mut("/{id}")
            .unwrap()
            .actions
            .insert(ActionType::Delete, Action::new());
        assert!(users.resource("/{id}").unwrap().has_action(ActionType::Delete));
    }

    #[test]
    fn test_walk_visits_every_node_once() {
        let mut seen = Vec::new();
        users().walk(&mut |r| seen.push(r.uri()));
        assert_eq!(seen, vec!["/users", "/users/{id}", "/users/{id}/orders"]);
    }

    #[test]
    fn test_uri_parameters_stay_on_their_resource() {
        let id = UriParameter {
            description: Some("user id".into()),
            ..UriParameter::default()
        };
        let users = Resource::new("/users").with_child(
            Resource::new("/{id}")
                .with_display_name("User")
                .with_uri_parameter("id", id),
        );

        let child = users.resource("/{id}").unwrap();
        assert_eq!(child.display_name.as_deref(), Some("User"));
        assert_eq!(child.uri_parameters["id"].description.as_deref(), Some("user id"));
        assert!(users.uri_parameters.is_empty());
    }
}

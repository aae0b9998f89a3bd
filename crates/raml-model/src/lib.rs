//! # RAML Model
//!
//! This crate turns a declarative API description (a RAML-like document) into a
//! queryable tree of resources, and answers the question tooling keeps asking:
//! *what does path P support, including inherited behavior?*
//!
//! ## Core Concepts
//!
//! - **[`ActionType`]**: the closed registry of operation kinds (`GET`, `POST`, ...).
//! - **[`Trait`]**: a named bundle of action fragments, some marked conditional with `?`.
//! - **[`Resource`]**: a node addressed by a relative URI, owning its actions,
//!   its `use` list and its children.
//! - **[`Raml`]**: the document root. Owns the base URI, the [`TraitCatalog`]
//!   and the top-level resources.
//!
//! ## Lifecycle
//!
//! 1. Build the tree (by hand, or through a loader).
//! 2. Call [`Raml::apply_traits`] once.
//! 3. Query with [`Raml::resolve`] as often as needed.
//!
//! ```rust
//! use raml_model::{Action, ActionType, Raml, Resource, Trait};
//!
//! let mut api = Raml::new("Users", "http://api.example.com/v1")
//!     .with_trait(Trait::new("paged").provides(
//!         "get?",
//!         Action::new().with_query_parameter("page", "integer"),
//!     ))
//!     .with_resource(
//!         Resource::new("/users")
//!             .with_action(ActionType::Get, Action::new())
//!             .with_use("paged")
//!             .with_child(Resource::new("/{id}")),
//!     );
//!
//! api.apply_traits()?;
//!
//! let users = api.resolve("http://api.example.com/v1/users")?.expect("declared");
//! assert!(users.action(ActionType::Get).unwrap().query_parameters.contains_key("page"));
//! assert!(api.resolve("/v1/orders")?.is_none());
//! # Ok::<(), raml_model::RamlError>(())
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`RamlError`] and is fatal for the document. A path that
//! matches nothing is `Ok(None)`, not an error.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. Application borrows the trait
//! catalog read-only and mutates each resource exactly once.

pub mod action;
pub mod apply;
pub mod document;
pub mod error;
pub mod parameter;
pub mod resource;
pub mod tracing;
pub mod traits;

pub use action::{Action, ActionType};
pub use apply::ApplyReport;
pub use document::Raml;
pub use error::{RamlError, Result};
pub use parameter::{DocumentationItem, ParamType, UriParameter};
pub use resource::{Resource, ResourceMap};
pub use traits::{Provision, Trait, TraitCatalog};

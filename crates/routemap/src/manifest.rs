//! JSON route manifests.
//!
//! A manifest describes a whole routing table:
//!
//! ```json
//! {
//!   "routes": [
//!     {
//!       "methods": ["GET", "POST"],
//!       "name": "complex",
//!       "url": "/complex/{id}/{name}",
//!       "handler": ["App\\Controller", "complex"],
//!       "metadata": { "template": "complex.phtml" }
//!     }
//!   ]
//! }
//! ```
//!
//! Manifests can only reference controllers; callables are registered in code.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::metadata::Metadata;
use crate::route::{Handler, Route};
use crate::router::Router;

/// A controller reference as written in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandlerDefinition {
    /// `["Target", "action"]`
    Pair(String, String),
    /// `{ "controller": "Target", "action": "action" }`
    Controller { controller: String, action: String },
}

impl HandlerDefinition {
    /// Returns the `(target, action)` pair.
    #[must_use]
    pub fn parts(&self) -> (&str, &str) {
        match self {
            Self::Pair(target, action)
            | Self::Controller {
                controller: target,
                action,
            } => (target.as_str(), action.as_str()),
        }
    }
}

/// One route entry in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDefinition {
    pub methods: Vec<String>,
    pub name: String,
    pub url: String,
    pub handler: HandlerDefinition,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl RouteDefinition {
    /// Builds the route this entry describes.
    pub fn to_route<R>(&self) -> Result<Route<R>> {
        let (target, action) = self.handler.parts();
        let handler = Handler::controller(target, action)?;
        let route = Route::new(self.methods.iter().cloned(), self.name.as_str(), &self.url, handler)?;
        Ok(route.with_metadata(self.metadata.clone()))
    }
}

/// A deserialized route manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub routes: Vec<RouteDefinition>,
}

impl Manifest {
    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading manifest");
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registers every route, in manifest order, into a new router.
    pub fn into_router<R>(self) -> Result<Router<R>> {
        let mut router = Router::new();
        for definition in &self.routes {
            router.add_route(definition.to_route()?)?;
        }
        Ok(router)
    }
}

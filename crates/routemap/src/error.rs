//! Error types for routing.

use thiserror::Error;

/// Errors raised while building a routing table or constructing URLs.
///
/// A path that matches no route is not an error: [`Router::match_route`]
/// returns `None` for it.
///
/// [`Router::match_route`]: crate::Router::match_route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The catch-all marker is malformed or not the final segment.
    #[error("invalid catch-all in url '{url}': '*' must be the entire final segment")]
    InvalidCatchAll { url: String },

    /// A route was declared without any method.
    #[error("route '{name}' declares no methods")]
    NoMethods { name: String },

    /// A handler definition is neither a callable nor a controller pair.
    #[error("invalid handler: {reason}")]
    InvalidHandler { reason: String },

    /// Number of bound values differs from the pattern's placeholders.
    #[error("number of values ({actual}) does not match route parameters ({expected})")]
    ParameterCountMismatch { expected: usize, actual: usize },

    /// A bound value name is not a placeholder of the pattern.
    #[error("value name '{name}' does not match route parameters")]
    ParameterNameMismatch { name: String },

    /// A route with this name is already registered.
    #[error("route name already registered: {0}")]
    DuplicateRouteName(String),

    /// A route with this pattern is already registered for the method.
    #[error("url '{url}' already registered for method {method}")]
    DuplicatePattern { method: String, url: String },

    /// Route name not found.
    #[error("route '{0}' not found")]
    RouteNotFound(String),

    /// A URL parameter has no placeholder in the route pattern.
    #[error("parameter '{parameter}' not found in url '{url}'")]
    ParameterNotInUrl { parameter: String, url: String },

    /// Reading a manifest from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A manifest document could not be parsed.
    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Result type alias for routing operations.
pub type Result<T> = std::result::Result<T, RoutingError>;

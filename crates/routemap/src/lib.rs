//! # routemap
//!
//! A URL routing table: maps an (HTTP method, path) pair to a registered
//! handler, extracting path parameters and trailing catch-all segments.
//!
//! This crate provides:
//! - Path patterns with `{name}` placeholders and a trailing `*` catch-all
//! - Method buckets with opaque, case-sensitive method tokens
//! - Named routes for reverse URL construction
//! - JSON manifests describing a whole table
//!
//! ## Quick Start
//!
//! ```
//! use routemap::{Handler, Metadata, Router};
//!
//! let mut router = Router::new();
//! router
//!     .add(
//!         ["GET"],
//!         "user",
//!         "/users/{id}",
//!         Handler::callable(|args: &[&str]| format!("user {}", args[0])),
//!         Metadata::new(),
//!     )
//!     .unwrap();
//!
//! let matched = router.match_route("GET", "/users/42").unwrap();
//! assert_eq!(matched.parameter("id"), Some("42"));
//!
//! let callable = matched.route().callable().unwrap();
//! assert_eq!(callable(matched.parameters().values().as_slice()), "user 42");
//! ```
//!
//! ## Catch-all
//!
//! A pattern ending in `*` takes any number of trailing segments, including
//! none:
//!
//! ```
//! use routemap::{Handler, Metadata, Router};
//!
//! let mut router = Router::<()>::new();
//! router
//!     .add(["GET"], "catch", "/catch/{param}/*", Handler::controller("Catch", "all")?, Metadata::new())?;
//!
//! let matched = router.match_route("GET", "/catch/more/something/else").unwrap();
//! assert_eq!(matched.parameter("param"), Some("more"));
//! assert_eq!(matched.catch_all(), ["something", "else"]);
//! # Ok::<(), routemap::RoutingError>(())
//! ```
//!
//! ## Matching order
//!
//! Literal routes are found by direct lookup. Routes with placeholders or a
//! catch-all are tried in registration order and the first fit wins; there is
//! no specificity ranking.
//!
//! ## Named Routes
//!
//! ```ignore
//! let url = router.build_url("complex", &[("id", &2), ("name", &"stuff")])?;
//! assert_eq!(url, "/complex/2/stuff");
//! ```

mod error;
mod manifest;
mod metadata;
mod params;
mod path;
mod route;
mod router;

pub use error::{Result, RoutingError};
pub use manifest::{HandlerDefinition, Manifest, RouteDefinition};
pub use metadata::Metadata;
pub use params::ParameterValues;
pub use path::{normalize_path, PathPattern, PathSegment};
pub use route::{Callable, Handler, Route, RouteMatch};
pub use router::Router;

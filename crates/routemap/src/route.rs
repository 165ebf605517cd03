//! Route definitions and match results.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Result, RoutingError};
use crate::metadata::Metadata;
use crate::params::ParameterValues;
use crate::path::PathPattern;

/// A shared handler function, called with the ordered parameter values.
pub type Callable<R> = Arc<dyn Fn(&[&str]) -> R + Send + Sync>;

/// What a route dispatches to.
///
/// The router never calls handlers; it only hands them back with a match.
pub enum Handler<R> {
    /// Invoked directly with positional arguments.
    Callable(Callable<R>),
    /// A named target and action, resolved by the caller.
    Controller { target: String, action: String },
}

impl<R> Handler<R> {
    /// Wraps a function as a callable handler.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&[&str]) -> R + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(f))
    }

    /// Creates a controller reference. Both parts must be non-empty.
    pub fn controller(target: impl Into<String>, action: impl Into<String>) -> Result<Self> {
        let target = target.into();
        let action = action.into();
        if target.is_empty() || action.is_empty() {
            return Err(RoutingError::InvalidHandler {
                reason: format!(
                    "controller pair needs a target and an action, got ('{target}', '{action}')"
                ),
            });
        }
        Ok(Self::Controller { target, action })
    }
}

impl<R> Clone for Handler<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Callable(f) => Self::Callable(Arc::clone(f)),
            Self::Controller { target, action } => Self::Controller {
                target: target.clone(),
                action: action.clone(),
            },
        }
    }
}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Callable(..)"),
            Self::Controller { target, action } => f
                .debug_struct("Controller")
                .field("target", target)
                .field("action", action)
                .finish(),
        }
    }
}

/// A single route definition.
///
/// Routes are immutable once built. Values bound by a match live in the
/// returned [`RouteMatch`], never on the route.
#[derive(Debug)]
pub struct Route<R> {
    methods: Vec<String>,
    name: String,
    pattern: PathPattern,
    handler: Handler<R>,
    metadata: Metadata,
}

impl<R> Route<R> {
    /// Creates a new route.
    ///
    /// The URL is normalized (`test/` becomes `/test`) and its catch-all
    /// placement validated. Duplicate methods are collapsed.
    pub fn new<M, S>(
        methods: M,
        name: impl Into<String>,
        url: &str,
        handler: Handler<R>,
    ) -> Result<Self>
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut unique: Vec<String> = Vec::new();
        for method in methods {
            let method = method.into();
            if !unique.contains(&method) {
                unique.push(method);
            }
        }
        if unique.is_empty() {
            return Err(RoutingError::NoMethods { name });
        }

        Ok(Self {
            methods: unique,
            name,
            pattern: PathPattern::parse(url)?,
            handler,
            metadata: Metadata::new(),
        })
    }

    /// Sets the route metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Exact, case-sensitive method check.
    #[must_use]
    pub fn supports_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized URL pattern.
    #[must_use]
    pub fn url(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    #[must_use]
    pub fn handler(&self) -> &Handler<R> {
        &self.handler
    }

    #[must_use]
    pub fn callable(&self) -> Option<&Callable<R>> {
        match &self.handler {
            Handler::Callable(f) => Some(f),
            Handler::Controller { .. } => None,
        }
    }

    /// Returns the `(target, action)` pair of a controller handler.
    #[must_use]
    pub fn controller(&self) -> Option<(&str, &str)> {
        match &self.handler {
            Handler::Controller { target, action } => Some((target.as_str(), action.as_str())),
            Handler::Callable(_) => None,
        }
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[must_use]
    pub fn metadata_value(&self, name: &str) -> Option<&Value> {
        self.metadata.get(name)
    }

    #[must_use]
    pub fn has_metadata_values(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Returns the placeholder names, in pattern order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        self.pattern.param_names()
    }

    #[must_use]
    pub fn has_parameters(&self) -> bool {
        self.pattern.has_placeholders()
    }

    #[must_use]
    pub fn has_catch_all(&self) -> bool {
        self.pattern.has_catch_all()
    }

    /// Binds parameter values to this route.
    ///
    /// The value names must be exactly the route's placeholder names; their
    /// order is kept as given.
    pub fn bind_parameter_values(&self, values: ParameterValues) -> Result<RouteMatch<'_, R>> {
        let expected = self.parameters();
        if values.len() != expected.len() {
            return Err(RoutingError::ParameterCountMismatch {
                expected: expected.len(),
                actual: values.len(),
            });
        }
        if let Some(name) = values.names().find(|n| !expected.iter().any(|e| e == *n)) {
            return Err(RoutingError::ParameterNameMismatch {
                name: name.to_string(),
            });
        }

        Ok(RouteMatch {
            route: self,
            parameters: values,
            catch_all: Vec::new(),
        })
    }
}

/// A matched route with the values bound for this match only.
#[derive(Debug)]
pub struct RouteMatch<'a, R> {
    route: &'a Route<R>,
    parameters: ParameterValues,
    catch_all: Vec<String>,
}

impl<'a, R> RouteMatch<'a, R> {
    /// A match with no bound values, used for literal routes.
    pub(crate) fn unbound(route: &'a Route<R>) -> Self {
        Self {
            route,
            parameters: ParameterValues::new(),
            catch_all: Vec::new(),
        }
    }

    /// The matched route.
    #[must_use]
    pub fn route(&self) -> &'a Route<R> {
        self.route
    }

    #[must_use]
    pub fn parameters(&self) -> &ParameterValues {
        &self.parameters
    }

    /// Gets a bound parameter value by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    #[must_use]
    pub fn has_parameter_values(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Segments captured by a trailing `*`, in path order.
    #[must_use]
    pub fn catch_all(&self) -> &[String] {
        &self.catch_all
    }

    /// Replaces the catch-all values. Any number of values is accepted.
    pub fn bind_catch_all_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catch_all = values.into_iter().map(Into::into).collect();
    }

    /// Splits the match into its owned values.
    #[must_use]
    pub fn into_parts(self) -> (&'a Route<R>, ParameterValues, Vec<String>) {
        (self.route, self.parameters, self.catch_all)
    }
}

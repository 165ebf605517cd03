//! Main router implementation.

use std::collections::HashMap;
use std::fmt::Display;

use tracing::{debug, trace};

use crate::error::{Result, RoutingError};
use crate::metadata::Metadata;
use crate::path::normalize_path;
use crate::route::{Handler, Route, RouteMatch};

/// Routes registered under one method token.
#[derive(Debug, Default)]
struct MethodTable {
    /// Route indices in registration order.
    order: Vec<usize>,
    /// Normalized pattern to route index.
    by_pattern: HashMap<String, usize>,
}

/// The routing table.
///
/// Built once with `&mut self`, then queried through `&self`. Matching never
/// mutates the table, so a `Router` can be shared across threads.
#[derive(Debug)]
pub struct Router<R> {
    /// Registered routes.
    routes: Vec<Route<R>>,
    /// Per-method buckets.
    tables: HashMap<String, MethodTable>,
    /// Method tokens in first-seen order.
    methods: Vec<String>,
    /// Named routes for reverse URL lookup.
    names: HashMap<String, usize>,
}

impl<R> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Router<R> {
    /// Creates a new empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            tables: HashMap::new(),
            methods: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Builds a route and registers it.
    pub fn add<M, S>(
        &mut self,
        methods: M,
        name: impl Into<String>,
        url: &str,
        handler: Handler<R>,
        metadata: Metadata,
    ) -> Result<()>
    where
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let route = Route::new(methods, name, url, handler)?.with_metadata(metadata);
        self.add_route(route)
    }

    /// Registers a route under each of its methods.
    ///
    /// Fails without touching the table if the name is taken, or if one of
    /// the route's methods already has a route with the same pattern.
    pub fn add_route(&mut self, route: Route<R>) -> Result<()> {
        if self.names.contains_key(route.name()) {
            return Err(RoutingError::DuplicateRouteName(route.name().to_string()));
        }
        for method in route.methods() {
            let taken = self
                .tables
                .get(method)
                .is_some_and(|table| table.by_pattern.contains_key(route.url()));
            if taken {
                return Err(RoutingError::DuplicatePattern {
                    method: method.clone(),
                    url: route.url().to_string(),
                });
            }
        }

        let index = self.routes.len();
        for method in route.methods() {
            if !self.tables.contains_key(method) {
                self.methods.push(method.clone());
            }
            let table = self.tables.entry(method.clone()).or_default();
            table.order.push(index);
            table.by_pattern.insert(route.url().to_string(), index);
        }
        self.names.insert(route.name().to_string(), index);

        debug!(
            name = route.name(),
            url = route.url(),
            methods = ?route.methods(),
            "registered route"
        );
        self.routes.push(route);
        Ok(())
    }

    /// Registers routes in order, stopping at the first failure.
    pub fn add_routes(&mut self, routes: impl IntoIterator<Item = Route<R>>) -> Result<()> {
        for route in routes {
            self.add_route(route)?;
        }
        Ok(())
    }

    /// Returns the routes registered for a method, in registration order.
    pub fn routes<'a>(&'a self, method: &str) -> impl Iterator<Item = &'a Route<R>> + 'a {
        self.tables
            .get(method)
            .into_iter()
            .flat_map(move |table| table.order.iter().map(move |&i| &self.routes[i]))
    }

    /// Iterates over all routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<R>> {
        self.routes.iter()
    }

    /// Method tokens with at least one route, in first-seen order.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Looks a route up by name.
    #[must_use]
    pub fn route_by_name(&self, name: &str) -> Option<&Route<R>> {
        self.names.get(name).map(|&i| &self.routes[i])
    }

    /// Generates a URL for a named route.
    ///
    /// Every key must name a `{key}` placeholder of the route's pattern. Each
    /// placeholder is replaced by its value, the last one if a key repeats.
    /// Placeholders that are not supplied stay in the output as-is. A route
    /// without placeholders returns its URL and ignores `parameters`.
    ///
    /// # Example
    ///
    /// ```
    /// use routemap::{Handler, Metadata, Router};
    ///
    /// let mut router = Router::<()>::new();
    /// router
    ///     .add(["GET"], "complex", "/complex/{id}/{name}", Handler::callable(|_| ()), Metadata::new())
    ///     .unwrap();
    ///
    /// let url = router.build_url("complex", &[("id", &2), ("name", &"stuff")]).unwrap();
    /// assert_eq!(url, "/complex/2/stuff");
    /// ```
    pub fn build_url(&self, name: &str, parameters: &[(&str, &dyn Display)]) -> Result<String> {
        let route = self
            .route_by_name(name)
            .ok_or_else(|| RoutingError::RouteNotFound(name.to_string()))?;

        if !route.has_parameters() {
            return Ok(route.url().to_string());
        }

        let mut supplied = Vec::with_capacity(parameters.len());
        for (key, value) in parameters {
            if !route.url().contains(&format!("{{{key}}}")) {
                return Err(RoutingError::ParameterNotInUrl {
                    parameter: (*key).to_string(),
                    url: route.url().to_string(),
                });
            }
            supplied.push((*key, value.to_string()));
        }

        Ok(route.pattern().reverse(&supplied))
    }

    /// Finds the route for a method and path.
    ///
    /// Literal routes are looked up directly. Otherwise routes with
    /// placeholders or a catch-all are tried in registration order and the
    /// first one that fits wins. Returns `None` when nothing matches.
    pub fn match_route(&self, method: &str, path: &str) -> Option<RouteMatch<'_, R>> {
        let path = normalize_path(path);
        let Some(table) = self.tables.get(method) else {
            trace!(method, %path, "no routes for method");
            return None;
        };

        if let Some(route) = table
            .by_pattern
            .get(&path)
            .map(|&i| &self.routes[i])
            .filter(|route| route.pattern().is_literal())
        {
            debug!(method, %path, route = route.name(), "direct match");
            return Some(RouteMatch::unbound(route));
        }

        for &index in &table.order {
            let route = &self.routes[index];
            if route.pattern().is_literal() {
                continue;
            }
            let Some((parameters, catch_all)) = route.pattern().match_path(&path) else {
                continue;
            };
            // Only fails for patterns that repeat a placeholder name.
            let Ok(mut matched) = route.bind_parameter_values(parameters) else {
                continue;
            };
            matched.bind_catch_all_values(catch_all);
            debug!(method, %path, route = route.name(), "pattern match");
            return Some(matched);
        }

        trace!(method, %path, "no route matched");
        None
    }
}

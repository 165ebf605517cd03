#![allow(dead_code)]

use routemap::{Handler, Metadata, Route, RouteMatch, Router};

pub const CONTROLLER: &str = "Tests\\Controller";

pub fn controller(action: &str) -> Handler<String> {
    Handler::controller(CONTROLLER, action)
        .unwrap_or_else(|e| panic!("Invalid controller action {action}: {e}"))
}

pub fn route(methods: &[&str], name: &str, url: &str) -> Route<String> {
    Route::new(methods.iter().copied(), name, url, Handler::callable(|_| String::new()))
        .unwrap_or_else(|e| panic!("Failed to build route {name} ({url}): {e}"))
}

/// The table most tests share: a literal, a two-method placeholder route and a callable.
pub fn default_router() -> Router<String> {
    let mut router = Router::new();
    router
        .add_routes([
            Route::new(["GET"], "simple", "/simple", controller("simple")).unwrap(),
            Route::new(["GET", "POST"], "complex", "/complex/{id}/{name}", controller("complex"))
                .unwrap(),
            Route::new(
                ["GET"],
                "callable",
                "/callable/{parameter}",
                Handler::callable(|args| format!("callable received: {}", args[0])),
            )
            .unwrap()
            .with_metadata(Metadata::new().with("template", "callable.phtml")),
        ])
        .unwrap_or_else(|e| panic!("Failed to build default router: {e}"));

    assert_eq!(router.routes("GET").count(), 3);
    assert_eq!(router.routes("POST").count(), 1);
    router
}

pub fn matched<'a>(router: &'a Router<String>, method: &str, path: &str) -> RouteMatch<'a, String> {
    router
        .match_route(method, path)
        .unwrap_or_else(|| panic!("Expected {method} {path} to match"))
}

//! Tests for method/path matching.

mod common;
use common::*;

use routemap::Router;

#[test]
fn match_simple_route() {
    let router = default_router();
    let m = matched(&router, "GET", "/simple");

    assert_eq!(m.route().methods(), ["GET"]);
    assert_eq!(m.route().url(), "/simple");
    assert_eq!(m.route().controller(), Some((CONTROLLER, "simple")));
    assert!(m.route().callable().is_none());
    assert!(!m.has_parameter_values());
    assert_eq!(m.parameter("stuff"), None);
}

#[test]
fn leading_and_trailing_slashes_do_not_matter() {
    let router = default_router();
    for path in ["simple", "/simple", "simple/", "/simple/"] {
        assert_eq!(matched(&router, "GET", path).route().name(), "simple");
    }
}

#[test]
fn unknown_path_returns_none() {
    let router = default_router();
    assert!(router.match_route("GET", "la-dee-dah").is_none());
}

#[test]
fn empty_router_returns_none() {
    assert!(Router::<String>::new().match_route("GET", "la-dee-dah").is_none());
}

#[test]
fn wrong_method_returns_none() {
    let router = default_router();
    assert!(router.match_route("GET", "/simple").is_some());
    assert!(router.match_route("POST", "/simple").is_none());
}

#[test]
fn methods_are_case_sensitive() {
    let router = default_router();
    assert!(router.match_route("get", "/simple").is_none());
}

#[test]
fn url_with_html_does_not_match() {
    let mut router = Router::new();
    router.add_route(route(&["GET"], "callable2", "/this-should-work")).unwrap();
    assert!(router.match_route("GET", "/<b>this-should-work</b>").is_none());
}

#[test]
fn complex_route_binds_parameters() {
    let router = default_router();
    for method in ["GET", "POST"] {
        let m = matched(&router, method, "/complex/id-value/name-value");
        assert_eq!(m.route().url(), "/complex/{id}/{name}");
        assert_eq!(m.route().methods(), ["GET", "POST"]);
        assert_eq!(m.route().controller(), Some((CONTROLLER, "complex")));
        assert!(m.has_parameter_values());
        assert_eq!(
            m.parameters().iter().collect::<Vec<_>>(),
            vec![("id", "id-value"), ("name", "name-value")]
        );
    }
}

#[test]
fn degenerate_values_round_trip() {
    let router = default_router();
    let cases = [
        ("/complex/id-value/0", "id-value", "0"),
        ("/complex/0/something", "0", "something"),
        ("/complex/123/00", "123", "00"),
        ("/complex/123/0.0", "123", "0.0"),
        ("/complex/123/0.00", "123", "0.00"),
        ("/complex/ /a", " ", "a"),
    ];
    for (path, id, name) in cases {
        let m = matched(&router, "GET", path);
        assert_eq!(m.parameter("id"), Some(id), "id for {path}");
        assert_eq!(m.parameter("name"), Some(name), "name for {path}");
    }
}

#[test]
fn callable_receives_positional_values() {
    let router = default_router();
    let m = matched(&router, "GET", "/callable/stuff");

    assert_eq!(m.parameter("parameter"), Some("stuff"));
    assert_eq!(
        m.route().metadata_value("template").and_then(|v| v.as_str()),
        Some("callable.phtml")
    );

    let callable = m.route().callable().expect("callable handler");
    let args = m.parameters().values();
    assert_eq!(callable(args.as_slice()), "callable received: stuff");
}

#[test]
fn catch_all_collects_trailing_segments() {
    let mut router = Router::new();
    router
        .add_route(route(&["GET"], "catch", "/catch/{param}/*"))
        .unwrap();

    let m = matched(&router, "GET", "/catch/more/something/else");
    assert_eq!(m.parameter("param"), Some("more"));
    assert_eq!(m.catch_all(), ["something", "else"]);

    let m = matched(&router, "GET", "/catch/more");
    assert_eq!(m.parameter("param"), Some("more"));
    assert!(m.catch_all().is_empty());
}

#[test]
fn bare_catch_all_route() {
    let mut router = Router::new();
    router.add_route(route(&["GET"], "everything", "*")).unwrap();

    assert!(matched(&router, "GET", "/").catch_all().is_empty());
    assert_eq!(matched(&router, "GET", "/a/b").catch_all(), ["a", "b"]);
}

#[test]
fn overlong_path_does_not_match_without_catch_all() {
    let router = default_router();
    assert!(router.match_route("GET", "/complex/1/two/three").is_none());
    assert!(router.match_route("GET", "/simple/extra").is_none());
}

#[test]
fn short_path_does_not_match_placeholders() {
    let router = default_router();
    assert!(router.match_route("GET", "/complex/1").is_none());
    assert!(router.match_route("GET", "/callable").is_none());
}

#[test]
fn empty_segment_binds_empty_value() {
    let router = default_router();
    let m = matched(&router, "GET", "/complex//x");
    assert_eq!(m.route().name(), "complex");
    assert_eq!(m.parameter("id"), Some(""));
    assert_eq!(m.parameter("name"), Some("x"));
}

#[test]
fn catch_all_keeps_empty_segments() {
    let mut router = Router::new();
    router.add_route(route(&["GET"], "files", "/files/*")).unwrap();

    assert_eq!(matched(&router, "GET", "/files/a//b").catch_all(), ["a", "", "b"]);
}

#[test]
fn first_registered_pattern_wins() {
    let mut router = Router::new();
    router
        .add_routes([
            route(&["GET"], "any-user", "/users/{id}"),
            route(&["GET"], "users-catch", "/users/*"),
        ])
        .unwrap();
    assert_eq!(matched(&router, "GET", "/users/me").route().name(), "any-user");
    assert_eq!(matched(&router, "GET", "/users/me/posts").route().name(), "users-catch");

    let mut router = Router::new();
    router
        .add_routes([
            route(&["GET"], "users-catch", "/users/*"),
            route(&["GET"], "any-user", "/users/{id}"),
        ])
        .unwrap();
    assert_eq!(matched(&router, "GET", "/users/me").route().name(), "users-catch");
}

#[test]
fn literal_route_wins_over_earlier_pattern() {
    let mut router = Router::new();
    router
        .add_routes([
            route(&["GET"], "any-user", "/users/{id}"),
            route(&["GET"], "me", "/users/me"),
        ])
        .unwrap();
    assert_eq!(matched(&router, "GET", "/users/me").route().name(), "me");
    assert_eq!(matched(&router, "GET", "/users/42").route().name(), "any-user");
}

#[test]
fn arbitrary_method_tokens_are_allowed() {
    let mut router = Router::new();
    router.add_route(route(&["TRACE"], "traceroute", "traceroute")).unwrap();
    assert_eq!(matched(&router, "TRACE", "traceroute").route().name(), "traceroute");
}

#[test]
fn same_url_different_methods_do_not_collide() {
    let mut router = Router::new();
    router
        .add_routes([
            route(&["GET"], "traceroute-get", "traceroute"),
            route(&["POST"], "traceroute-post", "traceroute"),
        ])
        .unwrap();

    assert_eq!(matched(&router, "GET", "traceroute").route().name(), "traceroute-get");
    assert_eq!(matched(&router, "POST", "traceroute").route().name(), "traceroute-post");
}

#[test]
fn same_route_reachable_from_every_method() {
    let mut router = Router::new();
    router.add_route(route(&["GET", "POST"], "traceroute", "traceroute")).unwrap();

    let get = matched(&router, "GET", "traceroute").route();
    let post = matched(&router, "POST", "traceroute").route();
    assert!(std::ptr::eq(get, post));
}

#[test]
fn matches_do_not_share_state() {
    let router = default_router();
    let first = matched(&router, "GET", "/complex/1/one");
    let second = matched(&router, "GET", "/complex/2/two");

    assert!(std::ptr::eq(first.route(), second.route()));
    assert_eq!(first.parameter("id"), Some("1"));
    assert_eq!(second.parameter("id"), Some("2"));
}

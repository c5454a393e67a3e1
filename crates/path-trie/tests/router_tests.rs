//! Integration tests for path-trie
//!
//! Organized by feature area:
//! - Trie construction (`define`)
//! - Literal, alternation, named and regex matching
//! - Definition-order precedence and backtracking
//! - Percent-decoding and rejected input

use path_trie::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Trie construction
// ============================================================================

#[test]
fn test_define_root() {
    let mut router = Router::new();
    router.define("/", "home").unwrap();

    assert_eq!(router.root().children().count(), 1);
    let (option, _) = router.root().children().next().unwrap();
    assert_eq!(option, &SegmentOption::literal(""));
}

#[test]
fn test_define_requires_leading_slash() {
    let mut router = Router::new();
    let err = router.define("test", "x").unwrap_err();
    assert!(matches!(err, RouteError::MissingLeadingSlash(ref p) if p == "test"));
    assert!(router.is_empty());
}

#[test]
fn test_define_first_level_children() {
    let mut router = Router::new();
    router.define("/test1", 1).unwrap();
    router.define("/test2", 2).unwrap();

    let root = router.root();
    assert_eq!(root.children().count(), 2);
    assert_eq!(
        root.child(&SegmentOption::literal("test1")).and_then(Node::payload),
        Some(&1)
    );
    assert_eq!(
        root.child(&SegmentOption::literal("test2")).and_then(Node::payload),
        Some(&2)
    );
}

#[test]
fn test_define_regex_edges_are_distinct_by_name() {
    let source = r"^[\w\.-]+$";
    let mut router = Router::new();
    router.define(&format!("/({})", source), "anon").unwrap();
    router.define(&format!("/:_id({})", source), "named").unwrap();

    let root = router.root();
    assert_eq!(root.children().count(), 2);

    let anon = SegmentOption::regex(None, source).unwrap();
    let named = SegmentOption::regex(Some("_id".to_string()), source).unwrap();
    assert_eq!(root.child(&anon).and_then(Node::payload), Some(&"anon"));
    assert_eq!(root.child(&named).and_then(Node::payload), Some(&"named"));
}

#[test]
fn test_define_separated_strings() {
    let mut router = Router::new();
    router.define("/test1|test2", "plain").unwrap();
    router.define("/:_id(test1|test2)", "named").unwrap();

    assert_eq!(router.root().children().count(), 4);
}

#[test]
fn test_redefine_replaces_payload_without_new_nodes() {
    let mut router = Router::new();
    router.define("/users/:id", "first").unwrap();
    let nodes = router.node_count();

    router.define("/users/:id", "second").unwrap();

    assert_eq!(router.node_count(), nodes);
    assert_eq!(*router.match_route("/users/1").unwrap().payload, "second");
}

#[rstest]
#[case("/:id+")]
#[case("/ok/test1|$$$")]
#[case("/:")]
#[case("/a b")]
fn test_define_rejects_invalid_fragment(#[case] pattern: &str) {
    let mut router = Router::new();
    assert!(matches!(
        router.define(pattern, ()),
        Err(RouteError::InvalidFragment(_))
    ));
}

#[test]
fn test_define_rejects_invalid_regex() {
    let mut router = Router::new();
    let err = router.define("/:id(a{2,1})", ()).unwrap_err();
    assert!(matches!(err, RouteError::InvalidRegex { ref fragment, .. } if fragment == ":id(a{2,1})"));
}

#[rstest]
#[case("/:id(a)|(b)")]
#[case("/(a)|(b)")]
#[case("/:id(x))")]
fn test_define_rejects_unbalanced_regex(#[case] pattern: &str) {
    let mut router = Router::new();
    assert!(matches!(
        router.define(pattern, "x"),
        Err(RouteError::InvalidRegex { .. })
    ));
    assert!(router.is_empty());
    assert!(router.match_route("/abc").is_none());
}

#[test]
fn test_routes_defined_counts_successful_defines() {
    let mut router = Router::new();
    assert_eq!(router.routes_defined(), 0);

    router.define("/a|b", 1).unwrap();
    router.define("/users/:id", 2).unwrap();
    router.define("/users/:id", 3).unwrap();
    assert!(router.define("no-slash", 4).is_err());
    assert!(router.define("/:id([)", 5).is_err());

    assert_eq!(router.routes_defined(), 3);
}

// ============================================================================
// Literal matching
// ============================================================================

#[rstest]
#[case("/")]
#[case("/about")]
#[case("/users/new")]
#[case("/v1.2/docs")]
#[case("/a/b/c/d/e")]
#[case("/trailing/")]
fn test_literal_round_trip(#[case] pattern: &str) {
    let mut router = Router::new();
    router.define(pattern, pattern.to_string()).unwrap();

    let route_match = router.match_route(pattern).unwrap();
    assert_eq!(route_match.payload, pattern);
    assert!(route_match.params.is_empty());
}

#[test]
fn test_trailing_slash_is_significant() {
    let mut router = Router::new();
    router.define("/about", "about").unwrap();

    assert!(router.match_route("/about").is_some());
    assert!(router.match_route("/about/").is_none());
}

#[test]
fn test_literal_is_case_sensitive() {
    let mut router = Router::new();
    router.define("/About", ()).unwrap();
    assert!(router.match_route("/about").is_none());
}

// ============================================================================
// Named parameters
// ============================================================================

#[rstest]
#[case("123")]
#[case("hello-world")]
#[case("with space")]
#[case("ünïcödé")]
fn test_named_param_captures_any_segment(#[case] value: &str) {
    let mut router = Router::new();
    router.define("/users/:id/posts", "posts").unwrap();

    let route_match = router
        .match_route(&format!("/users/{}/posts", value))
        .unwrap();
    assert_eq!(route_match.params, params(&[("id", value)]));
}

#[test]
fn test_named_param_rejects_empty_segment() {
    let mut router = Router::new();
    router.define("/users/:id", ()).unwrap();
    assert!(router.match_route("/users/").is_none());
}

#[test]
fn test_multiple_params() {
    let mut router = Router::new();
    router.define("/:org/:repo/issues/:number(\\d+)", "issue").unwrap();

    let route_match = router.match_route("/rust-lang/rust/issues/1234").unwrap();
    assert_eq!(
        route_match.params,
        params(&[("org", "rust-lang"), ("repo", "rust"), ("number", "1234")])
    );
}

#[test]
fn test_repeated_name_last_capture_wins() {
    let mut router = Router::new();
    router.define("/:id/:id", ()).unwrap();

    let route_match = router.match_route("/a/b").unwrap();
    assert_eq!(route_match.params, params(&[("id", "b")]));
}

// ============================================================================
// Alternation
// ============================================================================

#[test]
fn test_named_alternation() {
    let mut router = Router::new();
    router.define("/:_id(test1|test2)", "alt").unwrap();

    let m1 = router.match_route("/test1").unwrap();
    assert_eq!(m1.params, params(&[("_id", "test1")]));

    let m2 = router.match_route("/test2").unwrap();
    assert_eq!(m2.params, params(&[("_id", "test2")]));

    assert!(router.match_route("/test3").is_none());
}

#[test]
fn test_unnamed_alternation_captures_nothing() {
    let mut router = Router::new();
    router.define("/a|b|c/end", "alt").unwrap();

    for path in ["/a/end", "/b/end", "/c/end"] {
        let route_match = router.match_route(path).unwrap();
        assert_eq!(*route_match.payload, "alt");
        assert!(route_match.params.is_empty());
    }
    assert!(router.match_route("/d/end").is_none());
}

#[test]
fn test_alternation_branches_do_not_interfere() {
    let mut router = Router::new();
    router.define("/:type(a|b)/:id", "item").unwrap();

    assert_eq!(
        router.match_route("/a/8").unwrap().params,
        params(&[("type", "a"), ("id", "8")])
    );
    assert_eq!(
        router.match_route("/b/9").unwrap().params,
        params(&[("type", "b"), ("id", "9")])
    );
}

#[test]
fn test_alternation_branch_redefined_individually() {
    let mut router = Router::new();
    router.define("/a|b", "both").unwrap();
    router.define("/b", "only-b").unwrap();

    assert_eq!(*router.match_route("/a").unwrap().payload, "both");
    assert_eq!(*router.match_route("/b").unwrap().payload, "only-b");
}

// ============================================================================
// Regex segments
// ============================================================================

#[test]
fn test_regex_must_match_whole_segment() {
    let mut router = Router::new();
    router.define(r"/:id(\d+)", ()).unwrap();

    assert!(router.match_route("/42").is_some());
    assert!(router.match_route("/42x").is_none());
    assert!(router.match_route("/x42").is_none());
}

#[test]
fn test_unnamed_regex_captures_nothing() {
    let mut router = Router::new();
    router.define(r"/files/([a-f0-9]{8})", "blob").unwrap();

    let route_match = router.match_route("/files/deadbeef").unwrap();
    assert!(route_match.params.is_empty());
    assert!(router.match_route("/files/DEADBEEF").is_none());
}

// ============================================================================
// Precedence and backtracking
// ============================================================================

#[test]
fn test_literal_defined_before_regex_wins() {
    let mut router = Router::new();
    router.define("/haha", "literal").unwrap();
    router.define(r"/(\w{3,30})", "regex").unwrap();

    let route_match = router.match_route("/haha").unwrap();
    assert_eq!(*route_match.payload, "literal");
    assert!(route_match.params.is_empty());

    assert_eq!(*router.match_route("/hoho").unwrap().payload, "regex");
}

#[test]
fn test_regex_defined_before_literal_wins() {
    let mut router = Router::new();
    router.define(r"/(\w{3,30})", "regex").unwrap();
    router.define("/haha", "literal").unwrap();

    assert_eq!(*router.match_route("/haha").unwrap().payload, "regex");
}

#[test]
fn test_backtracking_to_sibling_subtree() {
    let mut router = Router::new();
    router.define("/users/:id/edit", "edit").unwrap();
    router.define("/users/admin/settings", "settings").unwrap();

    // `:id` was attached first and matches "admin", but its subtree has no
    // "settings" edge; the literal sibling must then be tried
    let route_match = router.match_route("/users/admin/settings").unwrap();
    assert_eq!(*route_match.payload, "settings");
    assert!(route_match.params.is_empty());

    let route_match = router.match_route("/users/admin/edit").unwrap();
    assert_eq!(*route_match.payload, "edit");
    assert_eq!(route_match.params, params(&[("id", "admin")]));
}

#[test]
fn test_backtracking_discards_deep_captures() {
    let mut router = Router::new();
    router.define("/:a/:b/x", "first").unwrap();
    router.define("/:c/y/:d", "second").unwrap();

    let route_match = router.match_route("/one/y/two").unwrap();
    assert_eq!(*route_match.payload, "second");
    assert_eq!(route_match.params, params(&[("c", "one"), ("d", "two")]));
}

#[test]
fn test_intermediate_node_without_payload_is_not_a_match() {
    let mut router = Router::new();
    router.define("/docs/intro", "intro").unwrap();

    assert!(router.match_route("/docs").is_none());

    router.define("/:page", "page").unwrap();
    let route_match = router.match_route("/docs").unwrap();
    assert_eq!(*route_match.payload, "page");
    assert_eq!(route_match.params, params(&[("page", "docs")]));
}

// ============================================================================
// Decoding and rejected input
// ============================================================================

#[test]
fn test_percent_decoding_before_matching() {
    let mut router = Router::new();
    router.define(r"/:_id(@\w+)", ()).unwrap();

    let route_match = router.match_route("/%40haha").unwrap();
    assert_eq!(route_match.params, params(&[("_id", "@haha")]));
}

#[test]
fn test_encoded_slash_splits_segments_after_decoding() {
    let mut router = Router::new();
    router.define("/a/b", "ab").unwrap();
    assert_eq!(*router.match_route("/a%2Fb").unwrap().payload, "ab");
}

#[rstest]
#[case("/%")]
#[case("/%4")]
#[case("/%zz")]
#[case("/%ff")]
fn test_malformed_encoding_is_no_match(#[case] path: &str) {
    let mut router = Router::new();
    router.define("/:any", ()).unwrap();

    assert!(router.match_route(path).is_none());
    assert!(router.try_match_route(path).unwrap().is_none());
}

#[test]
fn test_match_requires_leading_slash() {
    let mut router = Router::new();
    router.define("/haha", ()).unwrap();

    assert!(router.match_route("haha").is_none());
    assert!(matches!(
        router.try_match_route("haha"),
        Err(RouteError::MissingLeadingSlash(_))
    ));
    // decoded form is what gets checked
    assert!(router.try_match_route("%2Fhaha").unwrap().is_some());
}

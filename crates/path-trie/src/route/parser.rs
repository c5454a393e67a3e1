//! Fragment and pattern compilation
//!
//! Turns route pattern text into the [`SegmentOption`]s that label trie
//! edges. Parsing is a pure function of the input text. The grammar is
//! resolved by fixed precedence, first rule wins:
//!
//! 1. empty or plain literal: `users`, `v1.2`, `-`
//! 2. unnamed alternation: `a|b|c`
//! 3. optional `:name` prefix followed by nothing (`:id`) or by a
//!    parenthesized body: an alternation (`:kind(a|b)`) or else a regex
//!    (`:id(\d+)`, `(\w{3,30})`)
//!
//! Anything else is a configuration error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::pattern::SegmentOption;
use crate::error::RouteError;
use crate::path::split_segments;

static PLAIN_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("plain literal grammar"));

static SEPARATED_LITERALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-][A-Za-z0-9_.\-|]+[A-Za-z0-9_.\-]$")
        .expect("separated literal grammar")
});

static PARAM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:([A-Za-z0-9_]+)").expect("parameter name grammar"));

/// Compiles one `/`-delimited fragment into its edge options
///
/// Alternations expand into one option per member, in written order.
///
/// # Examples
///
/// ```
/// use path_trie::{parse_fragment, SegmentOption};
///
/// assert_eq!(parse_fragment("users").unwrap(), vec![SegmentOption::literal("users")]);
/// assert_eq!(parse_fragment(":id").unwrap(), vec![SegmentOption::named("id")]);
///
/// let options = parse_fragment(":kind(post|page)").unwrap();
/// assert_eq!(
///     options,
///     vec![
///         SegmentOption::named_literal("kind", "post"),
///         SegmentOption::named_literal("kind", "page"),
///     ]
/// );
///
/// let options = parse_fragment(r":id(\d+)").unwrap();
/// assert_eq!(options[0].pattern.as_ref().unwrap().source(), r"\d+");
///
/// assert!(parse_fragment("test1|$$$").is_err());
/// ```
pub fn parse_fragment(fragment: &str) -> Result<Vec<SegmentOption>, RouteError> {
    if fragment.is_empty() || PLAIN_LITERAL.is_match(fragment) {
        return Ok(vec![SegmentOption::literal(fragment)]);
    }

    if SEPARATED_LITERALS.is_match(fragment) {
        return Ok(split_alternatives(fragment, None));
    }

    let (name, rest) = split_param_name(fragment);

    if let (Some(name), "") = (name, rest) {
        return Ok(vec![SegmentOption::named(name)]);
    }

    let body = rest
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RouteError::InvalidFragment(fragment.to_string()))?;

    if SEPARATED_LITERALS.is_match(body) {
        return Ok(split_alternatives(body, name));
    }

    SegmentOption::regex(name.map(str::to_string), body)
        .map(|option| vec![option])
        .map_err(|source| RouteError::InvalidRegex {
            fragment: fragment.to_string(),
            source,
        })
}

/// Compiles a whole pattern, one option list per path level
///
/// Fails without partial output, so callers can validate before mutating.
///
/// # Examples
///
/// ```
/// use path_trie::parse_pattern;
///
/// let levels = parse_pattern("/users/:id").unwrap();
/// assert_eq!(levels.len(), 2);
///
/// // `/` is a single empty-literal level
/// let levels = parse_pattern("/").unwrap();
/// assert_eq!(levels.len(), 1);
///
/// assert!(parse_pattern("users").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<Vec<Vec<SegmentOption>>, RouteError> {
    if !pattern.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash(pattern.to_string()));
    }

    split_segments(pattern).map(parse_fragment).collect()
}

/// Splits `:name...` into `(Some(name), rest)`, or `(None, fragment)`
fn split_param_name(fragment: &str) -> (Option<&str>, &str) {
    PARAM_NAME
        .captures(fragment)
        .and_then(|caps| Some((caps.get(0)?.end(), caps.get(1)?.as_str())))
        .map(|(end, name)| (Some(name), &fragment[end..]))
        .unwrap_or((None, fragment))
}

fn split_alternatives(body: &str, name: Option<&str>) -> Vec<SegmentOption> {
    body.split('|')
        .map(|literal| match name {
            Some(name) => SegmentOption::named_literal(name, literal),
            None => SegmentOption::literal(literal),
        })
        .collect()
}

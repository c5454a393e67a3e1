//! Compiled match rules for a single trie edge
//!
//! A [`SegmentOption`] describes how one path segment is tested: against an
//! exact literal, against a regular expression, or not at all (a bare named
//! capture). Options double as trie edge keys, so equality is structural and
//! compares regex *source text*, never regex semantics.

use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;

/// A regex segment rule: the source as written plus its anchored compilation
///
/// The compiled form is wrapped in `^(?:...)$` so a segment must match in
/// full. Equality and hashing only look at [`source`](Self::source).
///
/// # Examples
///
/// ```
/// use path_trie::route::pattern::SegmentPattern;
///
/// let pattern = SegmentPattern::new(r"\d+").unwrap();
/// assert_eq!(pattern.source(), r"\d+");
/// assert!(pattern.is_match("42"));
/// assert!(!pattern.is_match("42a"));
/// ```
#[derive(Clone)]
pub struct SegmentPattern {
    source: String,
    regex: Regex,
}

impl SegmentPattern {
    /// Compiles `source` for full-segment matching
    ///
    /// The bare source is validated before it is anchored, so an unbalanced
    /// expression such as `a)|(b` is rejected instead of splitting the
    /// anchoring group.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        Regex::new(&source)?;
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self { source, regex })
    }

    /// The expression exactly as it appeared in the fragment
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True if the whole segment matches the expression
    pub fn is_match(&self, segment: &str) -> bool {
        self.regex.is_match(segment)
    }
}

impl PartialEq for SegmentPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for SegmentPattern {}

impl Hash for SegmentPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl fmt::Debug for SegmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SegmentPattern").field(&self.source).finish()
    }
}

/// One compiled alternative for a path segment
///
/// At least one field is set. The only option with an empty literal is the
/// one produced by an empty fragment, e.g. the root's child for `/`.
///
/// # Examples
///
/// ```
/// use path_trie::SegmentOption;
///
/// let id = SegmentOption::named("id");
/// assert!(id.matches("123"));
/// assert!(!id.matches(""));
///
/// let kind = SegmentOption::named_literal("kind", "post");
/// assert!(kind.matches("post"));
/// assert!(!kind.matches("page"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentOption {
    /// Parameter the segment is captured under
    pub name: Option<String>,
    /// Exact text the segment must equal
    pub literal: Option<String>,
    /// Expression the segment must fully match
    pub pattern: Option<SegmentPattern>,
}

impl SegmentOption {
    /// Unnamed literal, e.g. `users`
    pub fn literal(literal: impl Into<String>) -> Self {
        Self {
            name: None,
            literal: Some(literal.into()),
            pattern: None,
        }
    }

    /// Unconstrained capture, e.g. `:id`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            literal: None,
            pattern: None,
        }
    }

    /// One member of a named alternation, e.g. `post` from `:kind(post|page)`
    pub fn named_literal(name: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            literal: Some(literal.into()),
            pattern: None,
        }
    }

    /// Regex segment, captured when `name` is given
    pub fn regex(name: Option<String>, source: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            literal: None,
            pattern: Some(SegmentPattern::new(source)?),
        })
    }

    /// Tests a decoded path segment against this option
    ///
    /// Literal wins over pattern when both could apply. A bare name accepts
    /// any non-empty segment.
    pub fn matches(&self, segment: &str) -> bool {
        match (&self.literal, &self.pattern) {
            (Some(literal), _) => literal == segment,
            (None, Some(pattern)) => pattern.is_match(segment),
            (None, None) => self.name.is_some() && !segment.is_empty(),
        }
    }
}

/// Renders the option back into fragment syntax
impl fmt::Display for SegmentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .literal
            .as_deref()
            .or_else(|| self.pattern.as_ref().map(SegmentPattern::source));

        match (&self.name, body) {
            (Some(name), Some(body)) => write!(f, ":{}({})", name, body),
            (Some(name), None) => write!(f, ":{}", name),
            (None, Some(body)) if self.pattern.is_some() => write!(f, "({})", body),
            (None, Some(body)) => f.write_str(body),
            (None, None) => Ok(()),
        }
    }
}

//! Path utilities for decoding and segmentation
//!
//! All functions are pure: same input, same output, no side effects.

use std::borrow::Cow;
use std::str::Split;

/// Percent-decodes a request path
///
/// Returns `None` when an escape is malformed (`%` not followed by two hex
/// digits) or the decoded bytes are not UTF-8. Already-clean paths come back
/// as `Cow::Borrowed`.
///
/// # Examples
///
/// ```
/// use path_trie::path::decode_path;
/// use std::borrow::Cow;
///
/// assert_eq!(decode_path("/%40haha").as_deref(), Some("/@haha"));
/// assert!(matches!(decode_path("/plain"), Some(Cow::Borrowed("/plain"))));
///
/// assert_eq!(decode_path("/%zz"), None);
/// assert_eq!(decode_path("/100%"), None);
/// assert_eq!(decode_path("/%ff"), None); // not UTF-8
/// ```
pub fn decode_path(path: &str) -> Option<Cow<'_, str>> {
    if !has_valid_escapes(path) {
        return None;
    }

    urlencoding::decode(path).ok()
}

/// Splits a rooted path into its segments, dropping the leading empty one
///
/// Interior and trailing empty segments are kept, so `/a/` yields `a` and
/// `""`.
///
/// # Examples
///
/// ```
/// use path_trie::path::split_segments;
///
/// assert_eq!(split_segments("/a/b").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(split_segments("/").collect::<Vec<_>>(), vec![""]);
/// assert_eq!(split_segments("/a/").collect::<Vec<_>>(), vec!["a", ""]);
/// ```
pub fn split_segments(path: &str) -> Split<'_, char> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}

/// Every `%` must introduce exactly two hex digits
fn has_valid_escapes(path: &str) -> bool {
    path.split('%').skip(1).all(|chunk| {
        chunk
            .get(..2)
            .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
    })
}

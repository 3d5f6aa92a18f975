//! URL-fragment routing for the `/:filter` pattern.
//!
//! The host listens for fragment changes and hands the fragment here; the
//! captured segment goes to the view binder unvalidated.

use once_cell::sync::Lazy;
use regex::Regex;

static FILTER_ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?/([^/?#]+)/?$").expect("valid filter route regex"));

/// Extracts the `:filter` segment from a fragment such as `#/active`.
///
/// Returns `None` for an empty fragment or one that does not match the
/// pattern.
pub fn parse_route(fragment: &str) -> Option<String> {
    FILTER_ROUTE_RE
        .captures(fragment.trim())
        .and_then(|captures| captures.get(1))
        .map(|segment| segment.as_str().to_string())
}

/// Segment for `fragment`, falling back to `initial_route` when the
/// fragment carries none.
pub fn route_or_initial(fragment: &str, initial_route: &str) -> Option<String> {
    parse_route(fragment).or_else(|| parse_route(initial_route))
}

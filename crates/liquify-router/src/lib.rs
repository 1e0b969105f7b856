//! # Liquify Router
//!
//! Route pattern compiler for bracket-convention file routing:
//! - Static routes (`account/login`)
//! - Dynamic segments (`products/[handle]`)
//! - Spread segments (`docs/[...slug]`)
//! - Custom matchers (`items/[id([0-9]+)]`)
//!
//! A route definition compiles to an anchored matching expression plus a
//! parameter extractor. The compiled pattern source is shared between the
//! build-time matcher and the runtime snippet injected into materialized
//! templates, so it stays valid for both regex engines: slashes are kept
//! escaped and static text is escaped over the metacharacter set the two
//! engines agree on.
//!
//! Segments named `index` collapse to their parent path, so `index` matches
//! `/` and `account/index` matches `/account`.
//!
//! ## Example
//!
//! ```
//! use liquify_router::compile;
//!
//! let route = compile("products/[handle]", false).unwrap();
//! let params = route.matches("/products/red-shoes").unwrap();
//! assert_eq!(params.get("handle"), Some(&"red-shoes".to_string()));
//! ```

use std::collections::HashMap;

use regex::Regex;

pub mod pattern;

pub use pattern::{split_parts, Part};

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    /// The route definition this was compiled from, e.g. `products/[handle]`.
    pub source: String,
    /// Anchored matching expression over a request path.
    pub regex: Regex,
    /// How a successful match turns into named parameters.
    pub params: ParamExtractor,
}

impl RoutePattern {
    /// Matches a request path, returning extracted parameters on success.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.regex
            .captures(path)
            .map(|caps| self.params.extract(&caps))
    }

    /// Pattern source rendered as a browser regex literal, `/.../`.
    pub fn client_regex_literal(&self) -> String {
        format!("/{}/", self.regex.as_str())
    }
}

/// Parameter extraction for a compiled pattern.
///
/// The no-parameters case is a distinguished marker, not an empty name
/// list: the client runtime represents parameterless routes with its own
/// `empty` extractor and the injected snippet must render that identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamExtractor {
    /// No dynamic parts.
    Empty,
    /// Capture group `i + 1` binds to `names[i]`.
    Named(Vec<String>),
}

impl ParamExtractor {
    fn from_parts(parts: &[Part]) -> Self {
        let names: Vec<String> = parts
            .iter()
            .filter_map(|part| match part {
                Part::Dynamic { name, .. } => Some(name.clone()),
                Part::Static(_) => None,
            })
            .collect();

        if names.is_empty() {
            ParamExtractor::Empty
        } else {
            ParamExtractor::Named(names)
        }
    }

    /// Binds captured values to parameter names in declaration order.
    ///
    /// Values are bound verbatim; captured text is not URL-decoded.
    pub fn extract(&self, caps: &regex::Captures<'_>) -> HashMap<String, String> {
        match self {
            ParamExtractor::Empty => HashMap::new(),
            ParamExtractor::Named(names) => names
                .iter()
                .enumerate()
                .filter_map(|(i, name)| {
                    caps.get(i + 1)
                        .map(|m| (name.clone(), m.as_str().to_string()))
                })
                .collect(),
        }
    }

    /// Renders the client-side extractor source for the runtime snippet:
    /// `empty` for the marker, `(m) => ({ name: m[1], ... })` otherwise.
    pub fn client_source(&self) -> String {
        match self {
            ParamExtractor::Empty => "empty".to_string(),
            ParamExtractor::Named(names) => {
                let bindings: Vec<String> = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| format!("{}: m[{}]", name, i + 1))
                    .collect();
                format!("(m) => ({{ {} }})", bindings.join(", "))
            }
        }
    }
}

/// Compiles a route definition into a matching expression and extractor.
///
/// Compilation is pure: the same definition always yields the same pattern
/// source and extractor. With `require_trailing_slash` the expression
/// tolerates one trailing `/`; per-route compilation passes `false` (the
/// flag is reserved for combined matching).
pub fn compile(route: &str, require_trailing_slash: bool) -> Result<RoutePattern, regex::Error> {
    let segments: Vec<Vec<Part>> = route
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "index")
        .map(split_parts)
        .collect();

    let body = segments
        .iter()
        .map(|segment| segment.iter().map(render_part).collect::<String>())
        .collect::<Vec<_>>()
        .join("\\/");

    let trailing = if require_trailing_slash && !segments.is_empty() {
        "\\/?$"
    } else {
        "$"
    };
    let regex = Regex::new(&format!("^\\/{}{}", body, trailing))?;

    let parts: Vec<Part> = segments.into_iter().flatten().collect();
    Ok(RoutePattern {
        source: route.to_string(),
        regex,
        params: ParamExtractor::from_parts(&parts),
    })
}

fn render_part(part: &Part) -> String {
    match part {
        Part::Static(text) => pattern::escape_static(text),
        Part::Dynamic {
            matcher: Some(matcher),
            ..
        } => pattern::escape_slashes(matcher),
        Part::Dynamic { spread: true, .. } => "(.+)".to_string(),
        Part::Dynamic { .. } => "([^/]+?)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_source_keeps_slashes_escaped() {
        let route = compile("products/[handle]", false).unwrap();
        assert_eq!(route.regex.as_str(), r"^\/products\/([^/]+?)$");
    }

    #[test]
    fn extractor_is_empty_marker_without_dynamic_parts() {
        let route = compile("cart", false).unwrap();
        assert_eq!(route.params, ParamExtractor::Empty);
        assert_eq!(route.params.client_source(), "empty");
    }

    #[test]
    fn extractor_binds_groups_in_declaration_order() {
        let route = compile("account/activate/[id]/[token]", false).unwrap();
        assert_eq!(
            route.params.client_source(),
            "(m) => ({ id: m[1], token: m[2] })"
        );
    }
}

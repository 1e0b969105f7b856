//! Pattern parsing for route segments
//!
//! Pure parsing of bracket-convention route segments into typed parts.
//! All functions are pure: same input always yields the same parts.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// One piece of a route segment.
///
/// A segment like `[handle].json` splits into a dynamic part (`handle`)
/// followed by a static part (`.json`). Dynamic parts may carry a
/// parenthesized custom matcher, and a `...`-prefixed name marks a spread
/// part that consumes the remainder of the path.
///
/// # Examples
///
/// ```
/// use liquify_router::pattern::{split_parts, Part};
///
/// let parts = split_parts("[handle].json");
/// assert!(parts[0].is_dynamic());
/// assert_eq!(parts[1], Part::Static(".json".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Literal text, matched after URI escaping.
    Static(String),
    /// Bracketed placeholder.
    Dynamic {
        /// Parameter name with any spread marker stripped.
        name: String,
        /// Whether the part consumes multiple slash-delimited segments.
        spread: bool,
        /// Custom matcher, parentheses included, e.g. `([0-9]+)`.
        matcher: Option<String>,
    },
}

impl Part {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Part::Dynamic { .. })
    }
}

/// Splits one path segment on bracket boundaries into typed parts.
///
/// Bracket content may itself contain a parenthesized matcher, and the
/// matcher may contain `]`, so the scan tracks parenthesis depth instead of
/// searching for the nearest closing bracket. Empty static fragments are
/// discarded; a bracketless segment yields a single static part.
pub fn split_parts(segment: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut rest = segment;

    while let Some(open) = rest.find('[') {
        if open > 0 {
            parts.push(Part::Static(rest[..open].to_string()));
        }
        let inner = &rest[open + 1..];
        match find_bracket_close(inner) {
            Some(close) => {
                parts.push(parse_dynamic(&inner[..close]));
                rest = &inner[close + 1..];
            }
            None => {
                // Unterminated bracket: treat the remainder as literal text.
                parts.push(Part::Static(rest[open..].to_string()));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        parts.push(Part::Static(rest.to_string()));
    }
    parts
}

/// Index of the `]` closing a dynamic part, skipping any `]` nested inside
/// a parenthesized matcher.
fn find_bracket_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ']' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Parses bracket content into a dynamic part.
///
/// The name is everything before the first `(`; a parenthesized remainder
/// is kept verbatim as the custom matcher.
fn parse_dynamic(content: &str) -> Part {
    let (raw_name, matcher) = match content.find('(') {
        Some(i) => (&content[..i], Some(content[i..].to_string())),
        None => (content, None),
    };
    let (name, spread) = match raw_name.strip_prefix("...") {
        Some(stripped) if !stripped.is_empty() => (stripped, true),
        _ => (raw_name, false),
    };
    Part::Dynamic {
        name: name.to_string(),
        spread,
        matcher,
    }
}

/// Characters percent-escaped in static route text before regex escaping.
///
/// Unreserved and reserved URI characters stay literal, except `?` and `#`
/// (never valid inside a path literal) which are forced to `%3F`/`%23`.
/// Brackets stay literal so route text that survived part-splitting still
/// matches the on-disk names.
const STATIC_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'[')
    .remove(b']');

/// Escapes static part text for literal matching inside the pattern.
pub fn escape_static(text: &str) -> String {
    let encoded = utf8_percent_encode(text, STATIC_TEXT).to_string();
    escape_regex_literal(&encoded)
}

/// Backslash-escapes the metacharacters both the build-time regex engine
/// and the browser `RegExp` parser treat specially outside character
/// classes. The pattern source is embedded in both, which is why the wider
/// escape set of `regex::escape` is not used here.
fn escape_regex_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escapes bare `/` in a custom matcher so the assembled pattern source can
/// be embedded as a browser regex literal unchanged.
pub(crate) fn escape_slashes(matcher: &str) -> String {
    let mut out = String::with_capacity(matcher.len());
    let mut escaped = false;
    for c in matcher.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}

//! Path pattern parsing and matching.

use crate::error::{Result, RoutingError};
use crate::params::ParameterValues;

/// A segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A literal string segment.
    Literal(String),
    /// A placeholder segment (e.g., `{id}`), binds exactly one path segment.
    Placeholder(String),
    /// The trailing `*` marker, binds zero or more remaining segments.
    CatchAll,
}

/// A normalized, validated URL pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The normalized pattern string.
    pattern: String,
    /// Parsed segments.
    segments: Vec<PathSegment>,
    /// Placeholder names in order.
    param_names: Vec<String>,
}

/// Normalizes a path to a single leading `/` and no trailing `/`.
///
/// ```
/// assert_eq!(routemap::normalize_path("simple/"), "/simple");
/// assert_eq!(routemap::normalize_path("//"), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

/// Splits a normalized path into segments. The root has none.
fn split_segments(normalized: &str) -> Vec<&str> {
    let trimmed = normalized.trim_start_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

impl PathPattern {
    /// Parses a pattern string.
    ///
    /// Pattern syntax:
    /// - `/users` - literal path
    /// - `/users/{id}` - path with a placeholder
    /// - `/files/{bucket}/*` - trailing catch-all
    ///
    /// # Example
    ///
    /// ```
    /// use routemap::PathPattern;
    ///
    /// let pattern = PathPattern::parse("posts/{id}/comments/{comment_id}/").unwrap();
    /// assert_eq!(pattern.as_str(), "/posts/{id}/comments/{comment_id}");
    /// assert_eq!(pattern.param_names(), ["id", "comment_id"]);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let pattern = normalize_path(raw);
        let parts = split_segments(&pattern);
        let last = parts.len().saturating_sub(1);

        let mut segments = Vec::with_capacity(parts.len());
        let mut param_names = Vec::new();

        for (i, part) in parts.iter().enumerate() {
            if *part == "*" && i == last {
                segments.push(PathSegment::CatchAll);
            } else if part.contains('*') {
                return Err(RoutingError::InvalidCatchAll {
                    url: pattern.clone(),
                });
            } else if let Some(name) = placeholder_name(part) {
                param_names.push(name.to_string());
                segments.push(PathSegment::Placeholder(name.to_string()));
            } else {
                segments.push(PathSegment::Literal((*part).to_string()));
            }
        }

        Ok(Self {
            pattern,
            segments,
            param_names,
        })
    }

    /// Returns the normalized pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the placeholder names in pattern order.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        !self.param_names.is_empty()
    }

    #[must_use]
    pub fn has_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::CatchAll))
    }

    /// True when only an identical path can match this pattern.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        !self.has_placeholders() && !self.has_catch_all()
    }

    /// Walks a normalized path against this pattern.
    ///
    /// Returns the bound placeholder values and catch-all segments, or `None`
    /// if the path does not fit. A path longer than the pattern only fits when
    /// the pattern ends with `*`.
    pub(crate) fn match_path(&self, normalized: &str) -> Option<(ParameterValues, Vec<String>)> {
        let incoming = split_segments(normalized);
        let catch_all = self.has_catch_all();

        let mut params = ParameterValues::new();
        let mut rest = Vec::new();

        for (i, value) in incoming.iter().enumerate() {
            match self.segments.get(i) {
                Some(PathSegment::Literal(literal)) => {
                    if literal != value {
                        return None;
                    }
                }
                Some(PathSegment::Placeholder(name)) => params.set(name.as_str(), *value),
                Some(PathSegment::CatchAll) => rest.push((*value).to_string()),
                None if catch_all => rest.push((*value).to_string()),
                None => return None,
            }
        }

        // Unvisited pattern segments are only acceptable as an empty catch-all.
        match self.segments.get(incoming.len()..) {
            Some([] | [PathSegment::CatchAll]) | None => Some((params, rest)),
            Some(_) => None,
        }
    }

    /// Generates a path by filling placeholders from `values`.
    ///
    /// When a name is supplied more than once the last value wins. Values are
    /// inserted as-is and never rescanned. Placeholders without a value and
    /// the catch-all marker are written back unchanged.
    pub(crate) fn reverse(&self, values: &[(&str, String)]) -> String {
        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                PathSegment::Literal(s) => path.push_str(s),
                PathSegment::Placeholder(name) => {
                    match values.iter().rev().find(|(key, _)| *key == name.as_str()) {
                        Some((_, value)) => path.push_str(value),
                        None => {
                            path.push('{');
                            path.push_str(name);
                            path.push('}');
                        }
                    }
                }
                PathSegment::CatchAll => path.push('*'),
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        path
    }
}

/// Returns the name inside a `{name}` segment.
fn placeholder_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

//! URL completion for stylesheet-relative references.
//!
//! [URL Standard](https://url.spec.whatwg.org/)
//!
//! CSS `url(...)` values are written relative to the stylesheet that holds
//! them. Subresource collection completes them against that base before
//! handing them to the loader.

/// Completes a possibly-relative URL against some base.
pub trait UrlResolver {
    /// Return the absolute form of `relative`.
    fn complete_url(&self, relative: &str) -> String;
}

/// The base URL of an owning stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetBase {
    base: Option<String>,
}

impl StylesheetBase {
    /// A base rooted at `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            base: Some(url.into()),
        }
    }

    /// No base: relative references are returned untouched.
    #[must_use]
    pub const fn none() -> Self {
        Self { base: None }
    }

    /// The base URL, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.base.as_deref()
    }
}

impl UrlResolver for StylesheetBase {
    fn complete_url(&self, relative: &str) -> String {
        resolve_url(relative, self.as_str())
    }
}

/// Resolve a potentially relative URL against a base URL.
///
/// # Algorithm
///
/// STEP 1: "If url is an absolute URL, return url."
///
/// STEP 2: Otherwise splice it into the base: scheme-relative (`//host`),
/// origin-relative (`/path`), query or fragment only, or path-relative with
/// `.` and `..` segments folded.
#[must_use]
pub fn resolve_url(href: &str, base_url: Option<&str>) -> String {
    let href = href.trim();

    // STEP 1
    if scheme_of(href).is_some() {
        return href.to_string();
    }

    let Some(base) = base_url else {
        return href.to_string();
    };
    let Some(scheme) = scheme_of(base) else {
        return href.to_string();
    };

    // STEP 2
    if href.is_empty() {
        return strip_fragment(base).to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        return format!("{scheme}://{rest}");
    }

    let after_scheme = &base[scheme.len() + 1..];
    let (authority, base_path) = after_scheme.strip_prefix("//").map_or(("", after_scheme), |rest| {
        rest.find('/')
            .map_or((rest, "/"), |slash| (&rest[..slash], &rest[slash..]))
    });
    let prefix = if after_scheme.starts_with("//") {
        format!("{scheme}://{authority}")
    } else {
        format!("{scheme}:")
    };

    if href.starts_with('#') {
        return format!("{}{href}", strip_fragment(base));
    }
    if href.starts_with('?') {
        let path = base_path.split(['?', '#']).next().unwrap_or_default();
        return format!("{prefix}{path}{href}");
    }
    if href.starts_with('/') {
        return format!("{prefix}{}", normalize_path(href));
    }

    let base_path = base_path.split(['?', '#']).next().unwrap_or_default();
    let directory = base_path.rsplit_once('/').map_or("", |(dir, _)| dir);
    format!("{prefix}{}", normalize_path(&format!("{directory}/{href}")))
}

/// The scheme of an absolute URL: ASCII alpha followed by alphanumerics,
/// `+`, `-` or `.`, terminated by `:`.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let scheme = &url[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    (first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')))
    .then_some(scheme)
}

fn strip_fragment(url: &str) -> &str {
    url.split('#').next().unwrap_or(url)
}

/// Fold `.` and `..` segments of an absolute path, keeping any query or
/// fragment suffix intact.
fn normalize_path(path: &str) -> String {
    let split = path.find(['?', '#']).unwrap_or(path.len());
    let (path, suffix) = path.split_at(split);

    let mut segments: Vec<&str> = Vec::new();
    let mut trailing_slash = false;
    for segment in path.split('/').skip(1) {
        trailing_slash = false;
        match segment {
            "." => trailing_slash = true,
            ".." => {
                let _ = segments.pop();
                trailing_slash = true;
            }
            other => segments.push(other),
        }
    }

    let mut out = String::with_capacity(path.len());
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    if trailing_slash || out.is_empty() {
        out.push('/');
    }
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_is_untouched() {
        assert_eq!(
            resolve_url("https://cdn.test/a.png", Some("http://site.test/css/main.css")),
            "https://cdn.test/a.png"
        );
        assert_eq!(resolve_url("data:image/png;base64,AA", None), "data:image/png;base64,AA");
    }

    #[test]
    fn test_relative_path_joins_stylesheet_directory() {
        assert_eq!(
            resolve_url("img/bg.png", Some("http://site.test/css/main.css")),
            "http://site.test/css/img/bg.png"
        );
    }

    #[test]
    fn test_dot_segments_are_folded() {
        assert_eq!(
            resolve_url("../img/./bg.png", Some("http://site.test/css/main.css")),
            "http://site.test/img/bg.png"
        );
        assert_eq!(
            resolve_url("../../../x.png", Some("http://site.test/a/b.css")),
            "http://site.test/x.png"
        );
    }

    #[test]
    fn test_origin_and_scheme_relative() {
        let base = Some("https://site.test/css/main.css?v=2");
        assert_eq!(resolve_url("/x.png", base), "https://site.test/x.png");
        assert_eq!(resolve_url("//cdn.test/x.png", base), "https://cdn.test/x.png");
    }

    #[test]
    fn test_query_and_fragment_only() {
        let base = Some("http://site.test/sprite.svg?v=1#old");
        assert_eq!(resolve_url("#icon", base), "http://site.test/sprite.svg?v=1#icon");
        assert_eq!(resolve_url("?v=2", base), "http://site.test/sprite.svg?v=2");
    }

    #[test]
    fn test_without_base() {
        assert_eq!(StylesheetBase::none().complete_url("a.png"), "a.png");
        assert_eq!(
            StylesheetBase::new("file:///home/u/page.css").complete_url("a.png"),
            "file:///home/u/a.png"
        );
    }
}

use crate::UrlError;
use std::fmt;

use ::url::Url;

/// A canonical URL, used as the identity of a page during a crawl
///
/// The canonical form is `scheme://host[:port]/path[?query]`:
///
/// - scheme is `http` or `https`, anything else is rejected
/// - the fragment is always dropped
/// - the query string is preserved verbatim
/// - userinfo is dropped
/// - non-default ports are preserved
///
/// Construction goes through [`normalize_url`], which is idempotent:
/// normalizing an already-canonical URL yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl(Url);

impl CanonicalUrl {
    /// Returns the canonical string form
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host component
    ///
    /// Always present: URLs without a host are rejected during
    /// normalization.
    pub fn host_str(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    /// Resolves an href found on this page and normalizes the result
    ///
    /// Relative hrefs are joined against this URL first, so `/about` on
    /// `https://example.com/docs` becomes `https://example.com/about`.
    pub fn join(&self, href: &str) -> Result<CanonicalUrl, UrlError> {
        let joined = self
            .0
            .join(href)
            .map_err(|e| UrlError::Parse(e.to_string()))?;
        normalize_url(joined.as_str())
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Normalizes a URL string to its canonical form
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed or relative
/// 2. Reject any scheme other than `http` or `https`
/// 3. Reject URLs without a host
/// 4. Rebuild as `scheme://host[:port]/path[?query]`, dropping the
///    fragment and any userinfo; the query string is kept verbatim
///
/// # Arguments
///
/// * `raw` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(CanonicalUrl)` - The canonical URL
/// * `Err(UrlError)` - The string is not a crawlable absolute URL
///
/// # Examples
///
/// ```
/// use pagedive::url::normalize_url;
///
/// let url = normalize_url("http://example.com/page?q=1#section").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/page?q=1");
/// ```
pub fn normalize_url(raw: &str) -> Result<CanonicalUrl, UrlError> {
    let url = Url::parse(raw.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    let host = url.host_str().ok_or(UrlError::MissingHost)?;

    let mut canonical = format!("{}://{}", url.scheme(), host);
    if let Some(port) = url.port() {
        canonical.push(':');
        canonical.push_str(&port.to_string());
    }
    canonical.push_str(url.path());
    if let Some(query) = url.query() {
        canonical.push('?');
        canonical.push_str(query);
    }

    let parsed = Url::parse(&canonical).map_err(|e| UrlError::Parse(e.to_string()))?;
    Ok(CanonicalUrl(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_stripped() {
        let result = normalize_url("http://a.com/p?q=1#frag").unwrap();
        assert_eq!(result.as_str(), "http://a.com/p?q=1");
    }

    #[test]
    fn test_query_preserved_verbatim() {
        let result = normalize_url("https://example.com/page?b=2&a=1").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page?b=2&a=1");
    }

    #[test]
    fn test_scheme_preserved() {
        let result = normalize_url("http://example.com/page").unwrap();
        assert_eq!(result.as_str(), "http://example.com/page");
    }

    #[test]
    fn test_empty_path_becomes_root() {
        let result = normalize_url("https://example.com").unwrap();
        assert_eq!(result.as_str(), "https://example.com/");
    }

    #[test]
    fn test_host_lowercased() {
        let result = normalize_url("HTTPS://EXAMPLE.COM/Page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/Page");
    }

    #[test]
    fn test_port_preserved() {
        let result = normalize_url("http://127.0.0.1:8080/index").unwrap();
        assert_eq!(result.as_str(), "http://127.0.0.1:8080/index");
    }

    #[test]
    fn test_default_port_dropped() {
        let result = normalize_url("http://example.com:80/index").unwrap();
        assert_eq!(result.as_str(), "http://example.com/index");
    }

    #[test]
    fn test_userinfo_dropped() {
        let result = normalize_url("https://user:pw@example.com/private").unwrap();
        assert_eq!(result.as_str(), "https://example.com/private");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "http://a.com/p?q=1#frag",
            "https://example.com",
            "http://127.0.0.1:8080/a/b?x=%20y",
            "https://example.com/page?b=2&a=1",
        ] {
            let once = normalize_url(raw).unwrap();
            let twice = normalize_url(once.as_str()).unwrap();
            assert_eq!(once, twice, "normalization of {} is not idempotent", raw);
        }
    }

    #[test]
    fn test_rejects_other_schemes() {
        for raw in [
            "ftp://example.com/file",
            "mailto:someone@example.com",
            "javascript:void(0)",
            "data:text/html,<h1>x</h1>",
        ] {
            let result = normalize_url(raw);
            assert!(result.is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            normalize_url("/relative/path"),
            Err(UrlError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(normalize_url("not a url").is_err());
    }

    #[test]
    fn test_join_relative() {
        let base = normalize_url("https://example.com/docs/guide").unwrap();
        let joined = base.join("/about").unwrap();
        assert_eq!(joined.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_join_rejects_bad_scheme() {
        let base = normalize_url("https://example.com/").unwrap();
        assert!(base.join("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_equality_is_canonical() {
        let a = normalize_url("http://a.com/p#one").unwrap();
        let b = normalize_url("http://a.com/p#two").unwrap();
        assert_eq!(a, b);
    }
}

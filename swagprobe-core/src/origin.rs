// Origin derivation and candidate URL enumeration

/// Paths where Swagger UI is commonly mounted. The empty path checks the
/// bare origin.
pub const DEFAULT_CANDIDATE_PATHS: [&str; 5] = ["", "/swagger", "/swagger-ui", "/api-docs", "/docs"];

/// Ordered list of path suffixes probed on every origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePaths(Vec<String>);

impl CandidatePaths {
    pub fn new(paths: Vec<String>) -> Self {
        Self(paths)
    }

    /// Parse a comma-separated list. Items are trimmed; an empty item stands
    /// for the bare origin, so `",/swagger"` probes `""` then `/swagger`.
    pub fn parse_list(list: &str) -> Self {
        Self(list.split(',').map(|item| item.trim().to_string()).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CandidatePaths {
    fn default() -> Self {
        Self(DEFAULT_CANDIDATE_PATHS.iter().map(|p| p.to_string()).collect())
    }
}

/// `scheme://netloc` of a URL, with no path, query or fragment.
///
/// Only the scheme is lowercased; the netloc is kept exactly as written, so
/// host case, default ports and non-ASCII hosts survive. Nothing is
/// validated. A string without a scheme or `//` still yields something,
/// usually the degenerate `://`, which is probed as-is and fails there.
pub fn derive_origin(raw: &str) -> String {
    let raw = raw.trim();
    let (scheme, rest) = match raw.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => (scheme.to_ascii_lowercase(), rest),
        _ => (String::new(), raw),
    };

    let netloc = rest
        .strip_prefix("//")
        .map(|after| {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            &after[..end]
        })
        .unwrap_or("");

    format!("{}://{}", scheme, netloc)
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Join an origin and a candidate path. Trailing slashes on the origin are
/// dropped first, so the empty path gives the bare origin.
pub fn compose_full_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

/// Every full URL to probe for one origin, in path order.
pub fn candidate_urls(origin: &str, paths: &CandidatePaths) -> Vec<String> {
    paths
        .iter()
        .map(|path| compose_full_url(origin, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_drops_path_query_fragment() {
        assert_eq!(
            derive_origin("https://example.com/a/b?x=1#frag"),
            "https://example.com"
        );
    }

    #[test]
    fn test_origin_keeps_port_and_userinfo() {
        assert_eq!(
            derive_origin("http://user:pw@example.com:8080/x"),
            "http://user:pw@example.com:8080"
        );
    }

    #[test]
    fn test_origin_ipv6() {
        assert_eq!(derive_origin("http://[::1]:3000/docs"), "http://[::1]:3000");
    }

    #[test]
    fn test_origin_without_scheme_is_degenerate() {
        assert_eq!(derive_origin("example.com"), "://");
        assert_eq!(derive_origin("example.com/swagger"), "://");
        assert_eq!(derive_origin(""), "://");
    }

    #[test]
    fn test_origin_scheme_relative() {
        assert_eq!(derive_origin("//example.com/path"), "://example.com");
    }

    #[test]
    fn test_origin_with_empty_host() {
        assert_eq!(derive_origin("http://"), "http://");
    }

    #[test]
    fn test_origin_keeps_netloc_as_written() {
        assert_eq!(
            derive_origin("https://Example.COM:443/x"),
            "https://Example.COM:443"
        );
        assert_eq!(derive_origin("http://example.com:80/"), "http://example.com:80");
        assert_eq!(derive_origin("https://bücher.de/docs"), "https://bücher.de");
    }

    #[test]
    fn test_origin_lowercases_scheme_only() {
        assert_eq!(
            derive_origin("HTTP://Api.Example.com/v1"),
            "http://Api.Example.com"
        );
    }

    #[test]
    fn test_origin_host_port_without_slashes() {
        assert_eq!(derive_origin("example.com:8080"), "example.com://");
    }

    #[test]
    fn test_candidate_urls_default_paths() {
        let urls = candidate_urls("https://example.com", &CandidatePaths::default());
        assert_eq!(
            urls,
            vec![
                "https://example.com",
                "https://example.com/swagger",
                "https://example.com/swagger-ui",
                "https://example.com/api-docs",
                "https://example.com/docs",
            ]
        );
    }

    #[test]
    fn test_trailing_slashes_are_stripped() {
        assert_eq!(compose_full_url("https://example.com/", ""), "https://example.com");
        assert_eq!(
            compose_full_url("https://example.com//", "/docs"),
            "https://example.com/docs"
        );
    }

    #[test]
    fn test_degenerate_origin_composition() {
        // Trailing-slash stripping still applies to the degenerate origin
        assert_eq!(compose_full_url("://", ""), ":");
        assert_eq!(compose_full_url("://", "/swagger"), ":/swagger");
    }

    #[test]
    fn test_parse_list() {
        let paths = CandidatePaths::parse_list(",/swagger, /openapi ");
        assert_eq!(paths.iter().collect::<Vec<_>>(), vec!["", "/swagger", "/openapi"]);
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_default_paths_order() {
        let paths = CandidatePaths::default();
        assert_eq!(paths.iter().collect::<Vec<_>>(), DEFAULT_CANDIDATE_PATHS.to_vec());
    }
}

//! Hostname utilities
//!
//! Small helpers shared by pattern matching and the rule compiler. These work
//! on borrowed slices where possible.

/// Normalize a hostname for matching: ASCII-lowercase, strip a trailing dot.
pub fn normalize(host: &str) -> String {
    host.trim_end_matches('.').to_ascii_lowercase()
}

/// Get the parent domain (strip the leftmost label).
#[inline]
pub fn parent_domain(host: &str) -> Option<&str> {
    match host.find('.') {
        Some(idx) if idx < host.len() - 1 => Some(&host[idx + 1..]),
        _ => None,
    }
}

/// Iterator over host suffixes from most specific to least specific.
///
/// `sub.example.com` yields `sub.example.com`, `example.com`, `com`.
pub struct HostSuffixIter<'a> {
    current: Option<&'a str>,
}

impl<'a> Iterator for HostSuffixIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;
        self.current = parent_domain(result);
        Some(result)
    }
}

/// Walk host suffixes from the full host down to the bare TLD.
pub fn walk_suffixes(host: &str) -> HostSuffixIter<'_> {
    let current = if host.is_empty() { None } else { Some(host) };
    HostSuffixIter { current }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Sub.Example.COM"), "sub.example.com");
        assert_eq!(normalize("example.com."), "example.com");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_parent_domain() {
        assert_eq!(parent_domain("sub.example.com"), Some("example.com"));
        assert_eq!(parent_domain("example.com"), Some("com"));
        assert_eq!(parent_domain("com"), None);
        assert_eq!(parent_domain(""), None);
    }

    #[test]
    fn test_walk_suffixes() {
        let suffixes: Vec<&str> = walk_suffixes("a.b.example.com").collect();
        assert_eq!(suffixes, vec!["a.b.example.com", "b.example.com", "example.com", "com"]);
        assert_eq!(walk_suffixes("").count(), 0);
    }
}

//! Site rule matching
//!
//! Hostname-pattern rule lists and per-page policy resolution. Resolution is a
//! pure function over (hostname, rule tables): each feature is enabled iff any
//! pattern in its list matches, and a hostname that matches no list at all
//! falls back to the all-enabled default policy.

use crate::host::{normalize, walk_suffixes};
use crate::types::ResolvedPolicy;

// =============================================================================
// Site Patterns
// =============================================================================

/// A hostname predicate from a rule list.
///
/// Patterns assume a normalized hostname (lowercase, no trailing dot) and
/// never allocate while matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitePattern {
    /// Matches the hostname verbatim.
    Exact(String),
    /// Matches the apex domain and every subdomain of it.
    Domain(String),
    /// Matches proper subdomains only (the host must end with `.suffix`).
    Suffix(String),
}

impl SitePattern {
    /// Check the pattern against a normalized hostname.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            Self::Exact(exact) => host == exact,
            Self::Domain(domain) => walk_suffixes(host).any(|suffix| suffix == domain),
            Self::Suffix(suffix) => host
                .strip_suffix(suffix.as_str())
                .is_some_and(|head| head.ends_with('.')),
        }
    }
}

// =============================================================================
// Rule Set
// =============================================================================

/// Ordered per-feature pattern lists. Immutable once built; order within a
/// list does not affect the outcome (matching is an any-match).
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// Sites where the selection/copy unlock applies
    pub select_copy: Vec<SitePattern>,
    /// Sites where the context-menu unlock applies
    pub context_menu: Vec<SitePattern>,
    /// Sites where the blocking-overlay sweep applies
    pub overlay: Vec<SitePattern>,
}

impl RuleSet {
    /// Create an empty rule set. Resolving against it always yields the
    /// all-enabled default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total pattern count across the three lists.
    pub fn len(&self) -> usize {
        self.select_copy.len() + self.context_menu.len() + self.overlay.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the policy for a hostname.
    ///
    /// The fallback is all-or-nothing: it only applies when none of the three
    /// lists matched. A partial match suppresses the default for the whole
    /// policy, so unmatched features stay disabled.
    pub fn resolve(&self, hostname: &str) -> ResolvedPolicy {
        let host = normalize(hostname);

        let matched = ResolvedPolicy {
            unlock_select_copy: any_match(&self.select_copy, &host),
            unlock_context: any_match(&self.context_menu, &host),
            unlock_overlay: any_match(&self.overlay, &host),
        };

        let policy = if matched.any() {
            matched
        } else {
            ResolvedPolicy::ALL
        };

        log::debug!("resolved policy for '{host}': {policy:?}");
        policy
    }
}

#[inline]
fn any_match(patterns: &[SitePattern], host: &str) -> bool {
    patterns.iter().any(|pattern| pattern.matches(host))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(s: &str) -> SitePattern {
        SitePattern::Suffix(s.to_string())
    }

    fn domain(s: &str) -> SitePattern {
        SitePattern::Domain(s.to_string())
    }

    #[test]
    fn test_exact_pattern() {
        let pattern = SitePattern::Exact("example.com".to_string());
        assert!(pattern.matches("example.com"));
        assert!(!pattern.matches("sub.example.com"));
        assert!(!pattern.matches("example.org"));
    }

    #[test]
    fn test_domain_pattern() {
        let pattern = domain("example.com");
        assert!(pattern.matches("example.com"));
        assert!(pattern.matches("sub.example.com"));
        assert!(pattern.matches("a.b.example.com"));
        assert!(!pattern.matches("notexample.com"));
        assert!(!pattern.matches("example.com.evil.test"));
    }

    #[test]
    fn test_suffix_pattern() {
        let pattern = suffix("bilibili.com");
        assert!(pattern.matches("www.bilibili.com"));
        assert!(pattern.matches("live.bilibili.com"));
        // A suffix pattern does not match the apex itself
        assert!(!pattern.matches("bilibili.com"));
        assert!(!pattern.matches("notbilibili.com"));
    }

    #[test]
    fn test_no_match_falls_back_to_all() {
        let mut set = RuleSet::new();
        set.select_copy.push(suffix("bilibili.com"));
        set.context_menu.push(domain("nicovideo.jp"));

        assert_eq!(set.resolve("unlisted.test"), ResolvedPolicy::ALL);
        assert_eq!(RuleSet::new().resolve("anything.example"), ResolvedPolicy::ALL);
    }

    #[test]
    fn test_single_list_match_suppresses_default() {
        let mut set = RuleSet::new();
        set.select_copy.push(suffix("bilibili.com"));

        let policy = set.resolve("sub.bilibili.com");
        assert_eq!(
            policy,
            ResolvedPolicy {
                unlock_select_copy: true,
                unlock_context: false,
                unlock_overlay: false,
            }
        );
    }

    #[test]
    fn test_multi_list_match() {
        let mut set = RuleSet::new();
        set.select_copy.push(domain("example.com"));
        set.context_menu.push(domain("example.com"));
        set.overlay.push(domain("other.test"));

        let policy = set.resolve("www.example.com");
        assert_eq!(
            policy,
            ResolvedPolicy {
                unlock_select_copy: true,
                unlock_context: true,
                unlock_overlay: false,
            }
        );
    }

    #[test]
    fn test_resolve_normalizes_hostname() {
        let mut set = RuleSet::new();
        set.overlay.push(domain("example.com"));

        let policy = set.resolve("WWW.Example.COM.");
        assert!(policy.unlock_overlay);
        assert!(!policy.unlock_select_copy);
    }
}

//! Embedded default rule list
//!
//! Sites where running everything is harmful get a narrowed feature set here;
//! every unlisted site gets the full all-enabled default at resolve time.

use uf_core::rules::RuleSet;

use crate::builder::build_rule_set;
use crate::parser::parse_rule_list;

/// Shipped defaults.
///
/// Bilibili keeps only the selection/copy unlock: its player stacks
/// transparent pointer-events-none layers (danmaku) that the overlay sweep
/// would destroy. Nicovideo keeps only the context-menu unlock for the same
/// kind of reason.
pub const DEFAULT_RULES: &str = "\
! Unfence default site rules.
! A site listed here gets only the named features; unlisted sites get all.
.bilibili.com$select
.nicovideo.com$context
";

/// Compile the embedded defaults.
///
/// The embedded list is covered by tests; if it somehow fails to parse, the
/// empty set keeps the fail-open behavior (every hostname resolves all-true).
pub fn default_rule_set() -> RuleSet {
    parse_rule_list(DEFAULT_RULES)
        .map(|rules| build_rule_set(&rules))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uf_core::types::ResolvedPolicy;

    #[test]
    fn test_defaults_parse_cleanly() {
        let rules = parse_rule_list(DEFAULT_RULES).unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_default_set_matches_shipped_behavior() {
        let set = default_rule_set();

        // Bilibili subdomains: selection/copy only, danmaku layers survive
        let policy = set.resolve("www.bilibili.com");
        assert_eq!(
            policy,
            ResolvedPolicy {
                unlock_select_copy: true,
                unlock_context: false,
                unlock_overlay: false,
            }
        );

        // Nicovideo subdomains: context menu only
        let policy = set.resolve("sp.nicovideo.com");
        assert_eq!(
            policy,
            ResolvedPolicy {
                unlock_select_copy: false,
                unlock_context: true,
                unlock_overlay: false,
            }
        );

        // Everything else: fail-open default
        assert_eq!(set.resolve("unlisted.test"), ResolvedPolicy::ALL);
    }
}

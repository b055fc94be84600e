//! Rule set construction
//!
//! Turns parsed rule lines into the runtime `RuleSet`, dropping duplicate
//! (pattern, feature) pairs while preserving authoring order.

use uf_core::rules::{RuleSet, SitePattern};
use uf_core::types::FeatureMask;

use crate::parser::SiteRule;

/// Build a [`RuleSet`] from parsed rules.
pub fn build_rule_set(rules: &[SiteRule]) -> RuleSet {
    let mut set = RuleSet::new();

    for rule in rules {
        if rule.features.contains(FeatureMask::SELECT_COPY) {
            push_unique(&mut set.select_copy, &rule.pattern);
        }
        if rule.features.contains(FeatureMask::CONTEXT_MENU) {
            push_unique(&mut set.context_menu, &rule.pattern);
        }
        if rule.features.contains(FeatureMask::OVERLAY) {
            push_unique(&mut set.overlay, &rule.pattern);
        }
    }

    set
}

fn push_unique(list: &mut Vec<SitePattern>, pattern: &SitePattern) {
    if !list.contains(pattern) {
        list.push(pattern.clone());
    }
}

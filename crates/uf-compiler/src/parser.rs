//! Rule list parser
//!
//! Line-based format:
//!
//! ```text
//! ! comment
//! ||example.com              matches example.com and subdomains, all features
//! .bilibili.com$select       subdomains only, selection/copy unlock only
//! *.nicovideo.jp$context     same as the leading-dot form
//! intranet.host$overlay      exact hostname, overlay sweep only
//! ```
//!
//! A pattern with no `$` section applies to all three features. Rule lists are
//! small hand-authored configuration, so malformed lines are hard errors with
//! line numbers rather than silently skipped.

use uf_core::host::normalize;
use uf_core::rules::SitePattern;
use uf_core::types::FeatureMask;

/// A parsed rule line: one pattern and the features it enables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRule {
    pub pattern: SitePattern,
    pub features: FeatureMask,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleParseError {
    #[error("line {line}: empty pattern")]
    EmptyPattern { line: usize },

    #[error("line {line}: invalid hostname '{host}'")]
    InvalidHostname { line: usize, host: String },

    #[error("line {line}: unknown feature '{feature}' (expected select, context or overlay)")]
    UnknownFeature { line: usize, feature: String },

    #[error("line {line}: empty feature list after '$'")]
    EmptyFeatures { line: usize },
}

/// Parse a rule list. Line numbers in errors are 1-based.
pub fn parse_rule_list(text: &str) -> Result<Vec<SiteRule>, RuleParseError> {
    let mut rules = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }

        let (pattern_text, features_text) = match line.split_once('$') {
            Some((pattern, features)) => (pattern.trim(), Some(features.trim())),
            None => (line, None),
        };

        let features = match features_text {
            Some(text) => parse_features(text, line_no)?,
            None => FeatureMask::ALL,
        };
        let pattern = parse_pattern(pattern_text, line_no)?;

        rules.push(SiteRule { pattern, features });
    }

    Ok(rules)
}

fn parse_features(text: &str, line: usize) -> Result<FeatureMask, RuleParseError> {
    if text.is_empty() {
        return Err(RuleParseError::EmptyFeatures { line });
    }

    let mut mask = FeatureMask::empty();
    for part in text.split(',') {
        let feature = part.trim();
        match feature {
            "select" => mask |= FeatureMask::SELECT_COPY,
            "context" => mask |= FeatureMask::CONTEXT_MENU,
            "overlay" => mask |= FeatureMask::OVERLAY,
            _ => {
                return Err(RuleParseError::UnknownFeature {
                    line,
                    feature: feature.to_string(),
                })
            }
        }
    }
    Ok(mask)
}

fn parse_pattern(text: &str, line: usize) -> Result<SitePattern, RuleParseError> {
    if text.is_empty() {
        return Err(RuleParseError::EmptyPattern { line });
    }

    if let Some(domain) = text.strip_prefix("||") {
        return Ok(SitePattern::Domain(validate_host(domain, line)?));
    }
    if let Some(suffix) = text.strip_prefix("*.") {
        return Ok(SitePattern::Suffix(validate_host(suffix, line)?));
    }
    if let Some(suffix) = text.strip_prefix('.') {
        return Ok(SitePattern::Suffix(validate_host(suffix, line)?));
    }
    Ok(SitePattern::Exact(validate_host(text, line)?))
}

fn validate_host(host: &str, line: usize) -> Result<String, RuleParseError> {
    let normalized = normalize(host);

    let valid = !normalized.is_empty()
        && normalized.split('.').all(|label| {
            !label.is_empty()
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    if !valid {
        return Err(RuleParseError::InvalidHostname {
            line,
            host: host.to_string(),
        });
    }

    if !normalized.contains('.') {
        log::warn!("line {line}: single-label pattern '{normalized}' matches a bare host");
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comments_and_blanks() {
        let rules = parse_rule_list("! a comment\n\n   \n! another\n").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_parse_pattern_forms() {
        let rules = parse_rule_list("||example.com\n.bilibili.com\n*.nicovideo.jp\nintranet.host\n")
            .unwrap();
        assert_eq!(
            rules.iter().map(|r| r.pattern.clone()).collect::<Vec<_>>(),
            vec![
                SitePattern::Domain("example.com".to_string()),
                SitePattern::Suffix("bilibili.com".to_string()),
                SitePattern::Suffix("nicovideo.jp".to_string()),
                SitePattern::Exact("intranet.host".to_string()),
            ]
        );
        // No `$` section applies the rule to every feature
        assert!(rules.iter().all(|r| r.features == FeatureMask::ALL));
    }

    #[test]
    fn test_parse_feature_lists() {
        let rules = parse_rule_list(".bilibili.com$select\n||example.com$context,overlay\n").unwrap();
        assert_eq!(rules[0].features, FeatureMask::SELECT_COPY);
        assert_eq!(
            rules[1].features,
            FeatureMask::CONTEXT_MENU | FeatureMask::OVERLAY
        );
    }

    #[test]
    fn test_hostname_is_normalized() {
        let rules = parse_rule_list("||Example.COM.$select\n").unwrap();
        assert_eq!(rules[0].pattern, SitePattern::Domain("example.com".to_string()));
    }

    #[test]
    fn test_unknown_feature_is_an_error() {
        let err = parse_rule_list("||example.com$select,banner\n").unwrap_err();
        assert_eq!(
            err,
            RuleParseError::UnknownFeature {
                line: 1,
                feature: "banner".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_hostname_is_an_error() {
        let err = parse_rule_list("! ok\nhttp://example.com\n").unwrap_err();
        assert_eq!(
            err,
            RuleParseError::InvalidHostname {
                line: 2,
                host: "http://example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_pattern_and_features() {
        assert_eq!(
            parse_rule_list("$select\n").unwrap_err(),
            RuleParseError::EmptyPattern { line: 1 }
        );
        assert_eq!(
            parse_rule_list("||example.com$\n").unwrap_err(),
            RuleParseError::EmptyFeatures { line: 1 }
        );
    }
}

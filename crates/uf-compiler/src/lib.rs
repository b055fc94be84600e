//! Unfence Site Rule List Compiler
//!
//! This crate compiles the line-based site rule list format into the runtime
//! [`RuleSet`](uf_core::RuleSet).

pub mod builder;
pub mod defaults;
pub mod parser;

pub use builder::build_rule_set;
pub use defaults::{default_rule_set, DEFAULT_RULES};
pub use parser::{parse_rule_list, RuleParseError, SiteRule};

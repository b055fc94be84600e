//! Unfence Core Library
//!
//! This crate provides the policy engine for the Unfence page-restriction
//! unlocker: per-site rules deciding which unlock interventions run, the
//! computed-style heuristic that spots invisible blocking overlays, and the
//! interventions themselves.
//!
//! # Architecture
//!
//! The engine is host-agnostic. Everything that touches a live page goes
//! through the [`dom::PageDom`] abstraction: the browser binding implements it
//! over the real DOM, tests implement it over an in-memory mock. Policy
//! resolution happens once per page load; the overlay sweep re-runs on every
//! trigger and re-enumerates the page from scratch each time.
//!
//! # Modules
//!
//! - `host`: hostname normalization and parent-domain walking
//! - `rules`: site patterns, rule sets, per-page policy resolution
//! - `overlay`: computed-style blocking-overlay classifier
//! - `dom`: the page surface the engine drives
//! - `remover`: one-shot selection/copy and context-menu unlock
//! - `sweeper`: repeatable blocking-overlay sweep
//! - `types`: shared type definitions

pub mod dom;
pub mod host;
pub mod overlay;
pub mod remover;
pub mod rules;
pub mod sweeper;
pub mod types;

// Re-export commonly used types
pub use dom::PageDom;
pub use overlay::{is_blocking_overlay, StyleSnapshot};
pub use remover::apply_unlocks;
pub use rules::{RuleSet, SitePattern};
pub use sweeper::sweep;
pub use types::{FeatureMask, ResolvedPolicy};

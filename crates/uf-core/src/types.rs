//! Shared type definitions for Unfence
//!
//! The policy types are the contract between the rule matcher, the
//! interventions, and the host bindings.

// =============================================================================
// Feature Mask
// =============================================================================

bitflags::bitflags! {
    /// Bit mask over the three unlock features.
    ///
    /// Used by rule lines ("this pattern enables these features") and as a
    /// compact interchange form of a [`ResolvedPolicy`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureMask: u8 {
        /// Selection/copy unlock (style override + clipboard event interception)
        const SELECT_COPY = 1 << 0;
        /// Context-menu unlock
        const CONTEXT_MENU = 1 << 1;
        /// Blocking-overlay sweep
        const OVERLAY = 1 << 2;

        /// All three features
        const ALL = Self::SELECT_COPY.bits() | Self::CONTEXT_MENU.bits() | Self::OVERLAY.bits();
    }
}

// =============================================================================
// Resolved Policy
// =============================================================================

/// The per-page decision object: which interventions run on this hostname.
///
/// Computed once per page load by [`crate::rules::RuleSet::resolve`] and then
/// treated as immutable for the page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResolvedPolicy {
    /// Run the selection/copy unlock
    pub unlock_select_copy: bool,
    /// Run the context-menu unlock
    pub unlock_context: bool,
    /// Run the blocking-overlay sweep on load/scroll
    pub unlock_overlay: bool,
}

impl ResolvedPolicy {
    /// Every intervention enabled. This is the fail-open default for
    /// hostnames no rule list matched.
    pub const ALL: Self = Self {
        unlock_select_copy: true,
        unlock_context: true,
        unlock_overlay: true,
    };

    /// Every intervention disabled.
    pub const NONE: Self = Self {
        unlock_select_copy: false,
        unlock_context: false,
        unlock_overlay: false,
    };

    /// True if at least one intervention is enabled.
    #[inline]
    pub const fn any(&self) -> bool {
        self.unlock_select_copy || self.unlock_context || self.unlock_overlay
    }

    /// Convert to the compact mask form.
    pub fn as_mask(&self) -> FeatureMask {
        let mut mask = FeatureMask::empty();
        if self.unlock_select_copy {
            mask |= FeatureMask::SELECT_COPY;
        }
        if self.unlock_context {
            mask |= FeatureMask::CONTEXT_MENU;
        }
        if self.unlock_overlay {
            mask |= FeatureMask::OVERLAY;
        }
        mask
    }

    /// Build from the compact mask form.
    pub fn from_mask(mask: FeatureMask) -> Self {
        Self {
            unlock_select_copy: mask.contains(FeatureMask::SELECT_COPY),
            unlock_context: mask.contains(FeatureMask::CONTEXT_MENU),
            unlock_overlay: mask.contains(FeatureMask::OVERLAY),
        }
    }
}

impl Default for ResolvedPolicy {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_round_trip() {
        for bits in 0..=FeatureMask::ALL.bits() {
            let mask = FeatureMask::from_bits_truncate(bits);
            assert_eq!(ResolvedPolicy::from_mask(mask).as_mask(), mask);
        }
    }

    #[test]
    fn any_reflects_flags() {
        assert!(ResolvedPolicy::ALL.any());
        assert!(!ResolvedPolicy::NONE.any());
        assert!(ResolvedPolicy::from_mask(FeatureMask::OVERLAY).any());
    }
}

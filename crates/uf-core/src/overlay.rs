//! Computed-style blocking-overlay classifier
//!
//! A pure predicate over a computed-style snapshot. The target is the
//! invisible interaction-blocking layer: stacked above content, inert to
//! pointer input, and (nearly) transparent. Visible fixed UI, or anything that
//! accepts pointer events, is never classified as an overlay.
//!
//! The heuristic can both under- and over-match (a transparent tracking pixel
//! gets removed, a low-opacity tooltip with pointer events enabled is kept).
//! That imprecision is accepted behavior, not something to tune per site.

/// Opacity below this counts as invisible.
const OPACITY_FLOOR: f32 = 0.1;

// =============================================================================
// Style Snapshot
// =============================================================================

/// The computed style properties the classifier reads, captured as the raw
/// strings the host's computed-style query returned. Not cached; re-captured
/// on every sweep.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StyleSnapshot {
    pub position: String,
    pub z_index: String,
    pub pointer_events: String,
    pub background_color: String,
    pub opacity: String,
}

// =============================================================================
// Classifier
// =============================================================================

/// Classify a computed-style snapshot as a blocking overlay.
///
/// All four conjuncts are required:
/// 1. `position` is `fixed` or `absolute`;
/// 2. `z-index` is not `auto` (explicit stacking);
/// 3. `pointer-events` is `none`;
/// 4. the background is fully transparent OR opacity is below 0.1.
pub fn is_blocking_overlay(style: &StyleSnapshot) -> bool {
    is_stacked_position(&style.position)
        && style.z_index != "auto"
        && style.pointer_events == "none"
        && (is_fully_transparent(&style.background_color) || is_invisible_opacity(&style.opacity))
}

#[inline]
fn is_stacked_position(position: &str) -> bool {
    position == "fixed" || position == "absolute"
}

/// Browsers serialize a fully transparent computed background as
/// `rgba(0, 0, 0, 0)`; some engines report the `transparent` keyword instead.
#[inline]
fn is_fully_transparent(background_color: &str) -> bool {
    background_color == "rgba(0, 0, 0, 0)" || background_color == "transparent"
}

/// An opacity that fails to parse never satisfies this arm.
#[inline]
fn is_invisible_opacity(opacity: &str) -> bool {
    opacity
        .trim()
        .parse::<f32>()
        .is_ok_and(|value| value < OPACITY_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocking() -> StyleSnapshot {
        StyleSnapshot {
            position: "fixed".to_string(),
            z_index: "999".to_string(),
            pointer_events: "none".to_string(),
            background_color: "rgba(0, 0, 0, 0)".to_string(),
            opacity: "1".to_string(),
        }
    }

    #[test]
    fn test_blocking_overlay_detected() {
        assert!(is_blocking_overlay(&blocking()));

        let absolute = StyleSnapshot {
            position: "absolute".to_string(),
            ..blocking()
        };
        assert!(is_blocking_overlay(&absolute));
    }

    #[test]
    fn test_low_opacity_with_visible_background() {
        let style = StyleSnapshot {
            background_color: "rgb(255, 255, 255)".to_string(),
            opacity: "0.05".to_string(),
            ..blocking()
        };
        assert!(is_blocking_overlay(&style));
    }

    #[test]
    fn test_flipping_any_conjunct_flips_verdict() {
        let static_position = StyleSnapshot {
            position: "static".to_string(),
            ..blocking()
        };
        assert!(!is_blocking_overlay(&static_position));

        let auto_z = StyleSnapshot {
            z_index: "auto".to_string(),
            ..blocking()
        };
        assert!(!is_blocking_overlay(&auto_z));

        let pointer_auto = StyleSnapshot {
            pointer_events: "auto".to_string(),
            ..blocking()
        };
        assert!(!is_blocking_overlay(&pointer_auto));

        let visible = StyleSnapshot {
            background_color: "rgb(0, 0, 0)".to_string(),
            opacity: "0.5".to_string(),
            ..blocking()
        };
        assert!(!is_blocking_overlay(&visible));
    }

    #[test]
    fn test_opacity_threshold() {
        let at_floor = StyleSnapshot {
            background_color: "rgb(0, 0, 0)".to_string(),
            opacity: "0.1".to_string(),
            ..blocking()
        };
        assert!(!is_blocking_overlay(&at_floor));

        let below_floor = StyleSnapshot {
            background_color: "rgb(0, 0, 0)".to_string(),
            opacity: "0.09".to_string(),
            ..blocking()
        };
        assert!(is_blocking_overlay(&below_floor));
    }

    #[test]
    fn test_malformed_opacity_is_not_invisible() {
        let style = StyleSnapshot {
            background_color: "rgb(0, 0, 0)".to_string(),
            opacity: "garbage".to_string(),
            ..blocking()
        };
        assert!(!is_blocking_overlay(&style));
    }

    #[test]
    fn test_transparent_keyword() {
        let style = StyleSnapshot {
            background_color: "transparent".to_string(),
            ..blocking()
        };
        assert!(is_blocking_overlay(&style));
    }
}

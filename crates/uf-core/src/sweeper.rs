//! Blocking-overlay sweep
//!
//! Re-scans every element under the document body and removes the ones the
//! classifier flags. Each invocation is independent: no debouncing, no caching
//! of verdicts, a full O(DOM size) pass per trigger. The host binds this to
//! `load` and every `scroll` event.

use crate::dom::PageDom;
use crate::overlay::is_blocking_overlay;
use crate::types::ResolvedPolicy;

/// Run one sweep. No-op when the policy disables overlay unlocking.
///
/// Returns the number of elements removed (observability only). Absent DOM
/// mutation between calls, a second sweep removes nothing.
pub fn sweep<D: PageDom>(dom: &D, policy: &ResolvedPolicy) -> usize {
    if !policy.unlock_overlay {
        return 0;
    }

    let mut removed = 0;
    for element in dom.body_elements() {
        let Some(style) = dom.computed_style(&element) else {
            continue;
        };
        if is_blocking_overlay(&style) {
            dom.remove_element(&element);
            removed += 1;
        }
    }

    if removed > 0 {
        log::debug!("sweep removed {removed} blocking overlay(s)");
    }
    removed
}

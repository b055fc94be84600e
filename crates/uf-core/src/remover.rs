//! One-shot restriction removal
//!
//! Applies the selection/copy and context-menu unlocks, each gated by its
//! policy flag. Runs synchronously at page startup, exactly once; if the page
//! re-adds handlers afterwards from a late-running script, nothing here
//! re-runs.

use crate::dom::PageDom;
use crate::types::ResolvedPolicy;

/// Global rule forcing selection back on, every vendor prefix, highest
/// priority so it overrides page-authored restrictions.
pub const USER_SELECT_CSS: &str = "\
* {
    -webkit-user-select: auto !important;
    -moz-user-select: auto !important;
    -ms-user-select: auto !important;
    user-select: auto !important;
}";

/// Events pages hook to suppress selection and clipboard access.
pub const SELECT_COPY_EVENTS: &[&str] = &["copy", "cut", "selectstart", "mousedown"];

pub const CONTEXT_MENU_EVENT: &str = "contextmenu";

/// Inline attribute pages use to block the context menu per element.
const CONTEXT_MENU_ATTRIBUTE: &str = "oncontextmenu";

/// Apply the unlock interventions enabled by `policy`.
///
/// The two unlocks are independent; neither is transactional with respect to
/// the other. Idempotent in effect, but callers run it once per page load.
pub fn apply_unlocks<D: PageDom>(dom: &D, policy: &ResolvedPolicy) {
    if policy.unlock_select_copy {
        unlock_select_copy(dom);
    }
    if policy.unlock_context {
        unlock_context_menu(dom);
    }
}

/// Restore text selection and clipboard events: style override, capture-phase
/// interception of the four suppression events, and clearing the legacy
/// document-level handler slots for the same events.
fn unlock_select_copy<D: PageDom>(dom: &D) {
    dom.inject_style(USER_SELECT_CSS);
    for event in SELECT_COPY_EVENTS {
        dom.intercept_event(event);
        dom.clear_document_handler(event);
    }
}

/// Restore the context menu: capture-phase interception, legacy slots on body
/// and the root element, and stripping the inline blocking attribute from
/// every current element.
fn unlock_context_menu<D: PageDom>(dom: &D) {
    dom.intercept_event(CONTEXT_MENU_EVENT);
    dom.clear_root_handlers(CONTEXT_MENU_EVENT);
    for element in dom.all_elements() {
        if dom.has_inline_handler(&element, CONTEXT_MENU_ATTRIBUTE) {
            dom.strip_inline_handler(&element, CONTEXT_MENU_ATTRIBUTE);
        }
    }
}

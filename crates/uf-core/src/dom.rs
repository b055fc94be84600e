//! Page-DOM abstraction
//!
//! The engine never touches a live page directly; it drives this trait. The
//! browser binding implements it over the real DOM, tests implement it over an
//! in-memory mock.
//!
//! Every mutation method is infallible best-effort: a missing body, an
//! already-removed element, or an absent handler slot degrade to a no-op.
//! There is no feedback channel to report a failed intervention through.

use crate::overlay::StyleSnapshot;

/// The complete surface the engine needs from a host page.
pub trait PageDom {
    /// Handle to one element. Cheap to clone.
    type Element: Clone;

    /// Every element in the document (`*`).
    fn all_elements(&self) -> Vec<Self::Element>;

    /// Every element under the document body (`body *`).
    fn body_elements(&self) -> Vec<Self::Element>;

    /// Computed-style snapshot for an element, or `None` when the host cannot
    /// produce one (detached element, missing view).
    fn computed_style(&self, element: &Self::Element) -> Option<StyleSnapshot>;

    /// Detach the element from the document.
    fn remove_element(&self, element: &Self::Element);

    /// Whether the element carries the given inline-handler attribute
    /// (e.g. `oncontextmenu`).
    fn has_inline_handler(&self, element: &Self::Element, attribute: &str) -> bool;

    /// Remove the given inline-handler attribute from the element.
    fn strip_inline_handler(&self, element: &Self::Element, attribute: &str);

    /// Append a global style rule to the document head.
    fn inject_style(&self, css: &str);

    /// Register a listener that stops `event` from reaching page handlers.
    ///
    /// Contract with the host: the listener observes the capture phase, so it
    /// runs before any target- or bubble-phase handler the page installed.
    /// Once registered it persists for the page's lifetime; the only teardown
    /// is navigation/unload.
    fn intercept_event(&self, event: &str);

    /// Overwrite the legacy single-slot `on{event}` handler on the document
    /// with null.
    fn clear_document_handler(&self, event: &str);

    /// Overwrite the legacy single-slot `on{event}` handler on the body and
    /// the root element with null.
    fn clear_root_handlers(&self, event: &str);
}

// =============================================================================
// Mock DOM (test fixture)
// =============================================================================

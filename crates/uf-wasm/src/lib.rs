//! WebAssembly content-script bindings for Unfence
//!
//! `init` runs once per page load: it resolves the policy for the current
//! hostname, applies the one-shot restriction remover synchronously, and then
//! binds the overlay sweep to capture-phase `load`/`scroll` listeners. The
//! remover always runs before any sweep because both registration and the
//! remover happen inside `init`, before any listener can fire.

use std::sync::OnceLock;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, Event, Window};

use uf_compiler::{build_rule_set, default_rule_set, parse_rule_list};
use uf_core::dom::PageDom;
use uf_core::overlay::StyleSnapshot;
use uf_core::remover::apply_unlocks;
use uf_core::rules::RuleSet;
use uf_core::sweeper::sweep;
use uf_core::types::ResolvedPolicy;

static POLICY: OnceLock<ResolvedPolicy> = OnceLock::new();

/// Lifecycle events that trigger a sweep, both observed in the capture phase.
const SWEEP_TRIGGERS: &[&str] = &["load", "scroll"];

// =============================================================================
// Entry points
// =============================================================================

/// Initialize the content script. Runs the policy resolution and the one-shot
/// unlocks, then registers the sweep triggers.
///
/// `rules` is an optional site rule list in the uf-compiler text format; when
/// absent or unparseable the embedded defaults apply (the content script has
/// no channel to report a bad list through; the CLI `check` command does).
#[wasm_bindgen]
pub fn init(rules: Option<String>) -> Result<(), JsValue> {
    if POLICY.get().is_some() {
        return Err(JsValue::from_str("Already initialized. Reload the page to reinitialize."));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let hostname = window.location().hostname().unwrap_or_default();

    let policy = load_rule_set(rules.as_deref()).resolve(&hostname);
    POLICY
        .set(policy)
        .map_err(|_| JsValue::from_str("Failed to store policy"))?;

    let dom = WebDom::new(window.clone(), document);
    apply_unlocks(&dom, &policy);

    // Registered even when the overlay sweep is disabled; the gate lives in
    // sweep() so the policy check stays in one place.
    for trigger in SWEEP_TRIGGERS {
        register_sweep_trigger(&window, trigger, policy)?;
    }

    Ok(())
}

#[wasm_bindgen]
pub fn is_initialized() -> bool {
    POLICY.get().is_some()
}

/// Run one sweep immediately. Returns the number of elements removed; 0 when
/// the script is uninitialized or the policy disables the sweep.
#[wasm_bindgen]
pub fn sweep_now() -> u32 {
    let policy = match POLICY.get() {
        Some(policy) => *policy,
        None => return 0,
    };

    match page_dom() {
        Some(dom) => sweep(&dom, &policy) as u32,
        None => 0,
    }
}

/// Resolve the policy a hostname would get under the supplied rule list (or
/// the embedded defaults). Pure helper for the embedding extension.
#[wasm_bindgen]
pub fn resolve_policy(hostname: &str, rules: Option<String>) -> JsValue {
    policy_to_js(&load_rule_set(rules.as_deref()).resolve(hostname))
}

/// The active policy for this page, plus an `initialized` flag.
#[wasm_bindgen]
pub fn get_policy_info() -> JsValue {
    let result = js_sys::Object::new();
    match POLICY.get() {
        Some(policy) => {
            let _ = js_sys::Reflect::set(&result, &"initialized".into(), &JsValue::from(true));
            let _ = js_sys::Reflect::set(
                &result,
                &"policy".into(),
                &policy_to_js(policy),
            );
        }
        None => {
            let _ = js_sys::Reflect::set(&result, &"initialized".into(), &JsValue::from(false));
        }
    }
    result.into()
}

fn load_rule_set(rules: Option<&str>) -> RuleSet {
    match rules {
        Some(text) => match parse_rule_list(text) {
            Ok(parsed) => build_rule_set(&parsed),
            Err(_) => default_rule_set(),
        },
        None => default_rule_set(),
    }
}

fn policy_to_js(policy: &ResolvedPolicy) -> JsValue {
    let result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &result,
        &"unlockSelectCopy".into(),
        &JsValue::from(policy.unlock_select_copy),
    );
    let _ = js_sys::Reflect::set(
        &result,
        &"unlockContext".into(),
        &JsValue::from(policy.unlock_context),
    );
    let _ = js_sys::Reflect::set(
        &result,
        &"unlockOverlay".into(),
        &JsValue::from(policy.unlock_overlay),
    );
    result.into()
}

fn page_dom() -> Option<WebDom> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some(WebDom::new(window, document))
}

fn register_sweep_trigger(
    window: &Window,
    event: &str,
    policy: ResolvedPolicy,
) -> Result<(), JsValue> {
    let win = window.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(document) = win.document() {
            let dom = WebDom::new(win.clone(), document);
            sweep(&dom, &policy);
        }
    });

    window.add_event_listener_with_callback_and_bool(
        event,
        closure.as_ref().unchecked_ref(),
        true,
    )?;

    // The listener persists for the page's lifetime.
    closure.forget();
    Ok(())
}

// =============================================================================
// WebDom
// =============================================================================

/// [`PageDom`] over the live page.
struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let mut elements = Vec::new();
        if let Ok(list) = self.document.query_selector_all(selector) {
            for index in 0..list.length() {
                if let Some(node) = list.item(index) {
                    if let Ok(element) = node.dyn_into::<Element>() {
                        elements.push(element);
                    }
                }
            }
        }
        elements
    }

    fn property(style: &CssStyleDeclaration, name: &str) -> String {
        style.get_property_value(name).unwrap_or_default()
    }
}

impl PageDom for WebDom {
    type Element = Element;

    fn all_elements(&self) -> Vec<Element> {
        self.query_all("*")
    }

    fn body_elements(&self) -> Vec<Element> {
        self.query_all("body *")
    }

    fn computed_style(&self, element: &Element) -> Option<StyleSnapshot> {
        let style = self.window.get_computed_style(element).ok()??;
        Some(StyleSnapshot {
            position: Self::property(&style, "position"),
            z_index: Self::property(&style, "z-index"),
            pointer_events: Self::property(&style, "pointer-events"),
            background_color: Self::property(&style, "background-color"),
            opacity: Self::property(&style, "opacity"),
        })
    }

    fn remove_element(&self, element: &Element) {
        element.remove();
    }

    fn has_inline_handler(&self, element: &Element, attribute: &str) -> bool {
        element.has_attribute(attribute)
    }

    fn strip_inline_handler(&self, element: &Element, attribute: &str) {
        let _ = element.remove_attribute(attribute);
    }

    fn inject_style(&self, css: &str) {
        let head = match self.document.head() {
            Some(head) => head,
            None => return,
        };
        if let Ok(style) = self.document.create_element("style") {
            style.set_text_content(Some(css));
            let _ = head.append_child(style.as_ref());
        }
    }

    fn intercept_event(&self, event: &str) {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.stop_propagation();
        });
        let _ = self.document.add_event_listener_with_callback_and_bool(
            event,
            closure.as_ref().unchecked_ref(),
            true,
        );
        closure.forget();
    }

    fn clear_document_handler(&self, event: &str) {
        clear_handler_slot(self.document.as_ref(), event);
    }

    fn clear_root_handlers(&self, event: &str) {
        if let Some(body) = self.document.body() {
            clear_handler_slot(body.as_ref(), event);
        }
        if let Some(root) = self.document.document_element() {
            clear_handler_slot(root.as_ref(), event);
        }
    }
}

/// Overwrite the legacy `on{event}` slot with null. A slot the page never set
/// is overwritten all the same; both cases are harmless.
fn clear_handler_slot(target: &JsValue, event: &str) {
    let slot = format!("on{event}");
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(&slot), &JsValue::NULL);
}

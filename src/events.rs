//! Mirrors interpreter effects to the page, for frontends that prefer a
//! listener over inspecting the command response. Compiled only for wasm;
//! the interpreter itself never touches the DOM.

use crate::command::Effect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit};

/// Deliver one effect to the page: a `__termfolioEffect` global callback
/// when the host page installed one, otherwise a `terminal-effect`
/// CustomEvent dispatched on window and document.
pub fn emit_effect(effect: &Effect) {
    let Some(win) = window() else {
        web_sys::console::warn_1(&"termfolio: no window, effect dropped".into());
        return;
    };

    let detail = serde_wasm_bindgen::to_value(effect).unwrap_or(JsValue::NULL);

    if let Ok(callback) = js_sys::Reflect::get(win.as_ref(), &"__termfolioEffect".into()) {
        if callback.is_function() {
            if let Ok(callback) = callback.dyn_into::<js_sys::Function>() {
                if callback.call1(&JsValue::NULL, &detail).is_ok() {
                    return;
                }
            }
        }
    }

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_detail(&detail);

    match CustomEvent::new_with_event_init_dict("terminal-effect", &init) {
        Ok(event) => {
            let _ = win.dispatch_event(&event);
            if let Some(doc) = win.document() {
                let _ = doc.dispatch_event(&event);
            }
        }
        Err(err) => {
            web_sys::console::error_2(&"termfolio: cannot create effect event:".into(), &err);
        }
    }
}

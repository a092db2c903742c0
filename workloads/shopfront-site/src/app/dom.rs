//! DOM plumbing: window listeners, the reveal observer and form access.

use leptos::ev;
use leptos::prelude::*;
use shopfront_interact::command::{FieldInput, FormKind, RevealId};
use shopfront_interact::Command;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use super::Runtime;

/// Attribute carrying a reveal target's id.
pub const REVEAL_ATTR: &str = "data-reveal";

const HAMBURGER_ID: &str = "hamburger";
const MOBILE_MENU_ID: &str = "mobileMenu";

/// Document clicks (menu dismissal) and scrolling (parallax).
pub fn listen_window(runtime: Runtime) {
    let _ = window_event_listener(ev::click, move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = |id: &str| {
            document()
                .get_element_by_id(id)
                .is_some_and(|el| el.contains(target.as_ref()))
        };
        let on_menu = inside(HAMBURGER_ID) || inside(MOBILE_MENU_ID);
        runtime.send(Command::DocumentClick { on_menu });
    });

    let _ = window_event_listener(ev::scroll, move |_| {
        let offset = window().page_y_offset().unwrap_or(0.0);
        runtime.send(Command::Scroll { offset });
    });
}

/// Observe every element carrying [`REVEAL_ATTR`].
pub fn observe_reveals(runtime: Runtime, threshold: f64) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Some(id) = entry
                    .target()
                    .get_attribute(REVEAL_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                // Crossings can be reported a rounding step under the threshold.
                let ratio = entry.intersection_ratio().max(threshold);
                runtime.send(Command::Intersect {
                    target: RevealId(id),
                    ratio,
                });
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let nodes = document().query_selector_all(&format!("[{}]", REVEAL_ATTR))?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Ok(())
}

/// Reset a form's fields to their initial values.
pub fn reset_form(form: FormKind) -> Result<(), JsValue> {
    let element = document()
        .get_element_by_id(form.element_id())
        .ok_or_else(|| JsValue::from_str(form.element_id()))?;
    element.dyn_into::<HtmlFormElement>()?.reset();
    Ok(())
}

fn submitted_form(event: &ev::SubmitEvent) -> Option<HtmlFormElement> {
    event.target()?.dyn_into::<HtmlFormElement>().ok()
}

/// Named input and textarea values of the submitted form.
pub fn form_fields(event: &ev::SubmitEvent) -> Vec<FieldInput> {
    let Some(form) = submitted_form(event) else {
        return Vec::new();
    };
    let controls = form.elements();
    let mut fields = Vec::new();
    for i in 0..controls.length() {
        let Some(control) = controls.item(i) else {
            continue;
        };
        let field = if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            if input.type_() == "submit" {
                continue;
            }
            FieldInput {
                name: input.name(),
                value: input.value(),
                required: input.required(),
            }
        } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            FieldInput {
                name: area.name(),
                value: area.value(),
                required: area.required(),
            }
        } else {
            continue;
        };
        if !field.name.is_empty() {
            fields.push(field);
        }
    }
    fields
}

/// Value of the submitted form's email input.
pub fn email_value(event: &ev::SubmitEvent) -> String {
    submitted_form(event)
        .and_then(|form| form.query_selector("input[type=\"email\"]").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

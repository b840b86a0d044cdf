use leptos::{ev, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_media_query, use_mouse, UseMouseReturn,
};
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::store::AppStore;

const HOVER_TARGETS: &str = "a, button, .hover-target";

/// Ring and dot following the pointer. Grows over interactive elements.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let store = AppStore::expect();
    let UseMouseReturn { x, y, .. } = use_mouse();
    let (hovering, set_hovering) = signal(false);

    // no pointer to follow on touch screens
    let coarse_pointer = use_media_query("(pointer: coarse)");
    Effect::new(move |_| {
        if coarse_pointer.get() {
            store.set_show_cursor(false);
        }
    });

    let _ = use_event_listener(use_document(), ev::mouseover, move |ev| {
        let over_target = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
            .is_some();
        set_hovering.set(over_target);
    });

    let translate = move |offset: f64| {
        format!(
            "transform: translate3d({}px, {}px, 0)",
            x.get() - offset,
            y.get() - offset
        )
    };

    view! {
        <Show when=move || store.show_cursor()>
            <div
                class=move || {
                    let hover = if hovering.get() { " hover" } else { "" };
                    format!("custom-cursor{hover} {}", store.cursor_type())
                }
                style=move || translate(20.0)
            ></div>
            <div class="custom-cursor-dot" style=move || translate(2.0)></div>
        </Show>
    }
}

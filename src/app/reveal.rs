use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::store::AppStore;

/// Fades its children in the first time they scroll into view.
///
/// With animations disabled (or reduced motion requested) the content is shown
/// immediately. `delay_ms` staggers siblings.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let store = AppStore::expect();
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    let shown = move || revealed.get() || !store.animations_active();

    view! {
        <div
            node_ref=target
            class=format!("reveal {class}")
            class:revealed=shown
            style=format!("--reveal-delay:{delay_ms}ms")
        >
            {children()}
        </div>
    }
}

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::store::AppStore;
use crate::state::SectionId;
use crate::tracker::{ScrollTracker, SectionBounds, SectionLayout};

/// Reads section geometry from the rendered document.
struct DomLayout;

impl SectionLayout for DomLayout {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let el = document()
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }
}

/// Publishes the section under the navigation bar to the store on every scroll.
pub fn use_section_tracker(store: AppStore) {
    let tracker = ScrollTracker::default();
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let current = store.active_section_untracked();
        let next = tracker.track(&DomLayout, y, current);
        if next != current {
            store.set_active_section(next);
        }
    });
}

pub fn smooth_scroll_to(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.as_str()) else {
        log::debug!("section {section} is not mounted");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Click handling shared by the nav links, the logo and the hero buttons.
pub fn go_to_section(store: AppStore, section: SectionId) {
    store.set_active_section(section);
    smooth_scroll_to(section);
    if store.menu_open_untracked() {
        store.set_menu_open(false);
    }
}

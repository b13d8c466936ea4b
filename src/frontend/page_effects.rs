//! Loader overlay and custom cursor.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::config::LOADER_FADE_MS;
use crate::dom::{self, Listener};

const CURSOR_HOVER_TARGETS: &str = "[data-cursor-hover], a, button";

/// Fades `#loader` out once the window has loaded.
pub fn dismiss_loader() {
    let Some(loader) = dom::query_html("#loader") else {
        return;
    };

    let fade = move || {
        dom::set_style(&loader, "opacity", "0");
        let loader = loader.clone();
        Timeout::new(LOADER_FADE_MS, move || dom::set_style(&loader, "display", "none")).forget();
    };

    let loaded = dom::document().is_some_and(|d| d.ready_state() == "complete");
    if loaded {
        fade();
    } else if let Some(win) = dom::window_target() {
        Listener::new(&win, "load", move |_| fade()).forget();
    }
}

fn hover_target(event: &Event) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(CURSOR_HOVER_TARGETS)
        .ok()
        .flatten()
}

/// Makes `#custom-cursor` track the pointer and grow over interactive elements.
/// Hover state is delegated from the document so re-rendered links keep it.
pub fn follow_cursor() -> Vec<Listener> {
    let Some(cursor) = dom::query_html("#custom-cursor") else {
        return Vec::new();
    };
    let Some(document) = dom::document_target() else {
        return Vec::new();
    };

    let follower = cursor.clone();
    let on_move = Listener::new(&document, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            dom::set_style(&follower, "left", &format!("{}px", event.client_x()));
            dom::set_style(&follower, "top", &format!("{}px", event.client_y()));
        }
    });

    let hovered = cursor.clone();
    let on_over = Listener::new(&document, "mouseover", move |event| {
        if hover_target(&event).is_some() {
            let _ = hovered.class_list().add_1("hovering");
        }
    });

    let on_out = Listener::new(&document, "mouseout", move |event| {
        if hover_target(&event).is_some() {
            let _ = cursor.class_list().remove_1("hovering");
        }
    });

    vec![on_move, on_over, on_out]
}

//! Scroll choreography: reveal triggers, intro timelines, the progress bar,
//! navbar auto-hide, the back-to-top button and active nav links.
//!
//! Reveal elements are hidden only once their trigger has been registered, so
//! a page without GSAP (or with a failing trigger) leaves every element at its
//! resting state and no visibility correction pass is ever needed.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::gsap::Gsap;
use crate::config::{
    ACTIVE_SECTION_ROOT_MARGIN, DRIVE_BUTTON_GLOW, DRIVE_BUTTON_HOVER_SCALE, DRIVE_BUTTON_REST,
    REVEAL_DURATION, REVEAL_EASE, REVEAL_END, REVEAL_START, STAGGER_START,
};
use crate::dom::{self, object, Listener};
use crate::scroll::{
    back_to_top_visible, progress_transform, scroll_progress, section_link_href, NavbarTracker,
    RevealDirection,
};

const REVEAL_SELECTOR: &str = ".gs_reveal:not(.project-tile)";
const DRIVE_BUTTON: &str = ".drive-button";

/// Everything installed for the page; dropping it detaches the listeners.
pub struct Choreography {
    _scroll: Option<Listener>,
    _hover: Vec<Listener>,
    observer: Option<IntersectionObserver>,
}

impl Drop for Choreography {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

pub fn install(gsap: Option<Gsap>) -> Choreography {
    let mut hover = Vec::new();
    if let Some(gsap) = gsap {
        let registered = register_reveals(gsap);
        log::debug!("registered {registered} reveal triggers");
        hover = play_intros(gsap);
        gsap.refresh_triggers();
    }

    Choreography {
        _scroll: track_scroll(),
        _hover: hover,
        observer: observe_sections(),
    }
}

fn hide(gsap: Gsap, element: &Element) {
    gsap.set(element, &object(&[("autoAlpha", 0.into())]));
}

fn show(gsap: Gsap, element: &Element) {
    gsap.set(element, &object(&[("autoAlpha", 1.into())]));
}

fn reveal(gsap: Gsap, element: &Element, entering_back: bool) {
    let classes = element.class_name();
    let (x, y) = RevealDirection::from_classes(classes.split_whitespace()).offset(entering_back);

    let from = object(&[("x", x.into()), ("y", y.into()), ("autoAlpha", 0.into())]);
    let to = object(&[
        ("duration", REVEAL_DURATION.into()),
        ("x", 0.into()),
        ("y", 0.into()),
        ("autoAlpha", 1.into()),
        ("ease", REVEAL_EASE.into()),
        ("overwrite", "auto".into()),
    ]);
    gsap.from_to(element, &from, &to);
}

fn callback(action: impl FnMut() + 'static) -> JsValue {
    Closure::<dyn FnMut()>::new(action).into_js_value()
}

fn register_reveals(gsap: Gsap) -> usize {
    let mut registered = 0;
    for element in dom::query_all(REVEAL_SELECTOR) {
        // ScrollTrigger may fire onEnter while creating the trigger, so the
        // element has to be hidden first and restored if registration fails.
        hide(gsap, &element);

        let on_enter = {
            let element = element.clone();
            callback(move || reveal(gsap, &element, false))
        };
        let on_enter_back = {
            let element = element.clone();
            callback(move || reveal(gsap, &element, true))
        };
        let on_leave = {
            let element = element.clone();
            callback(move || hide(gsap, &element))
        };

        let vars = object(&[
            ("trigger", element.clone().into()),
            ("start", REVEAL_START.into()),
            ("end", REVEAL_END.into()),
            ("onEnter", on_enter),
            ("onEnterBack", on_enter_back),
            ("onLeave", on_leave),
        ]);

        if gsap.create_trigger(&vars) {
            registered += 1;
        } else {
            show(gsap, &element);
        }
    }
    registered
}

fn scroll_trigger(trigger: &str) -> JsValue {
    object(&[("trigger", trigger.into()), ("start", STAGGER_START.into())]).into()
}

fn glow(gsap: Gsap, button: &Element, shadow: &str, scale: f64) {
    gsap.to(
        button,
        &object(&[
            ("duration", 0.3.into()),
            ("boxShadow", shadow.into()),
            ("scale", scale.into()),
            ("ease", REVEAL_EASE.into()),
        ]),
    );
}

/// Floats the drive-demo button and glows it on hover.
fn animate_drive_button(gsap: Gsap) -> Vec<Listener> {
    let Some(button) = dom::query(DRIVE_BUTTON) else {
        return Vec::new();
    };

    gsap.to(
        &button,
        &object(&[
            ("y", (-5).into()),
            ("duration", 2.into()),
            ("repeat", (-1).into()),
            ("yoyo", true.into()),
            ("ease", "power1.inOut".into()),
        ]),
    );

    let target = button.clone();
    let on_enter = Listener::new(&button, "mouseenter", move |_| {
        glow(gsap, &target, DRIVE_BUTTON_GLOW, DRIVE_BUTTON_HOVER_SCALE);
    });
    let target = button.clone();
    let on_leave = Listener::new(&button, "mouseleave", move |_| {
        glow(gsap, &target, DRIVE_BUTTON_REST, 1.0);
    });
    vec![on_enter, on_leave]
}

fn play_intros(gsap: Gsap) -> Vec<Listener> {
    if dom::query(".hero-content").is_some() {
        gsap.from(
            &".hero-content > *".into(),
            &object(&[
                ("duration", 1.into()),
                ("y", 30.into()),
                ("opacity", 0.into()),
                ("stagger", 0.1.into()),
                ("ease", "power3.out".into()),
                ("delay", 0.3.into()),
            ]),
        );
    }

    if dom::query(".hero-img").is_some() {
        gsap.to(
            &".hero-img".into(),
            &object(&[
                ("y", (-10).into()),
                ("duration", 3.into()),
                ("repeat", (-1).into()),
                ("yoyo", true.into()),
                ("ease", "power1.inOut".into()),
            ]),
        );
    }

    let hover = animate_drive_button(gsap);

    if !gsap.has_scroll_trigger() {
        return hover;
    }

    if dom::query(".skills-grid").is_some() {
        gsap.from(
            &".skill-card".into(),
            &object(&[
                ("scrollTrigger", scroll_trigger(".skills-grid")),
                ("duration", 0.6.into()),
                ("y", 30.into()),
                ("opacity", 0.into()),
                ("stagger", 0.08.into()),
                ("ease", REVEAL_EASE.into()),
            ]),
        );
    }

    if dom::query(".timeline").is_some() {
        for (side, x) in [("left", -50), ("right", 50)] {
            gsap.from(
                &format!(".timeline-container.{side}").into(),
                &object(&[
                    ("scrollTrigger", scroll_trigger(".timeline")),
                    ("duration", 0.8.into()),
                    ("x", x.into()),
                    ("opacity", 0.into()),
                    ("stagger", 0.2.into()),
                    ("ease", REVEAL_EASE.into()),
                ]),
            );
        }
    }

    hover
}

fn track_scroll() -> Option<Listener> {
    let win = window()?;
    let navbar = dom::query_html("#navbar");
    let progress = dom::query_html(".nav-progress");
    let back_to_top = dom::query("#backToTop");
    if navbar.is_none() {
        log::warn!("#navbar missing; auto-hide disabled");
    }

    let target = dom::window_target()?;
    let mut tracker = NavbarTracker::default();
    Some(Listener::new(&target, "scroll", move |_| {
        let offset = win.page_y_offset().unwrap_or(0.0);

        if let Some(navbar) = &navbar {
            dom::set_style(navbar, "transform", tracker.update(offset).transform());
        }

        if let Some(progress) = &progress {
            let scroll_height = dom::document()
                .and_then(|d| d.document_element())
                .map(|root| f64::from(root.scroll_height()))
                .unwrap_or(0.0);
            let (_, viewport_height) = dom::viewport_size();
            let ratio = scroll_progress(offset, scroll_height, viewport_height);
            dom::set_style(progress, "transform", &progress_transform(ratio));
        }

        if let Some(button) = &back_to_top {
            let _ = button
                .class_list()
                .toggle_with_force("show", back_to_top_visible(offset));
        }
    }))
}

fn mark_active_link(section_id: &str) {
    let href = section_link_href(section_id);
    for link in dom::query_all(".nav-link[href^=\"#\"]") {
        let active = link.get_attribute("href").as_deref() == Some(href.as_str());
        let _ = link.class_list().toggle_with_force("active", active);
    }
}

fn observe_sections() -> Option<IntersectionObserver> {
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(id) = entry.target().get_attribute("id") {
                    mark_active_link(&id);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ACTIVE_SECTION_ROOT_MARGIN);
    options.set_threshold(&JsValue::from(0.0));

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("section observer unavailable: {err:?}");
                return None;
            }
        };
    on_intersect.forget();

    for section in dom::query_all("section[id]") {
        observer.observe(&section);
    }
    Some(observer)
}

//! Smooth scrolling through Lenis, or the browser's own smooth scrolling when
//! Lenis is missing or fails to construct.

use std::mem;

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{
    window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use super::gsap::Gsap;
use crate::config::{ANCHOR_SCROLL_OFFSET, LENIS_DURATION, SMOOTH_SCROLL_DURATION};
use crate::dom::{self, object};
use crate::scroll::{smooth_scroll_easing, ScrollMode};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Lenis;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Lenis, JsValue>;

    #[wasm_bindgen(method)]
    fn raf(this: &Lenis, time: f64);

    #[wasm_bindgen(method, js_name = scrollTo)]
    fn scroll_to(this: &Lenis, target: &JsValue, options: &JsValue);

    #[wasm_bindgen(method)]
    fn on(this: &Lenis, event: &str, callback: &JsValue);
}

#[derive(Clone)]
pub enum SmoothScroll {
    Lenis(Lenis),
    Native,
}

impl PartialEq for SmoothScroll {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl SmoothScroll {
    pub fn init(gsap: Option<Gsap>) -> Self {
        let easing = Closure::<dyn Fn(f64) -> f64>::new(smooth_scroll_easing).into_js_value();
        let options = object(&[
            ("duration", LENIS_DURATION.into()),
            ("easing", easing),
            ("direction", "vertical".into()),
            ("gestureDirection", "vertical".into()),
            ("smooth", true.into()),
            ("mouseMultiplier", 1.into()),
            ("smoothTouch", false.into()),
            ("touchMultiplier", 2.into()),
            ("infinite", false.into()),
        ]);

        let constructed = Lenis::new(&options);
        let mode = ScrollMode::after_construction(&constructed);
        if let Some(behavior) = mode.root_scroll_behavior() {
            set_root_scroll_behavior(behavior);
        }

        match constructed {
            Ok(lenis) => {
                drive(&lenis, gsap);
                log::info!("Lenis smooth scrolling initialized");
                Self::Lenis(lenis)
            }
            Err(err) => {
                log::warn!("Lenis failed to initialize, falling back to native scrolling: {err:?}");
                Self::Native
            }
        }
    }

    pub fn scroll_to_top(&self) {
        match self {
            Self::Lenis(lenis) => {
                let options = object(&[("duration", SMOOTH_SCROLL_DURATION.into())]);
                lenis.scroll_to(&0.into(), &options);
            }
            Self::Native => {
                let Some(win) = window() else {
                    return;
                };
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }
        }
    }

    pub fn scroll_to_element(&self, target: &Element) {
        match self {
            Self::Lenis(lenis) => {
                let options = object(&[
                    ("duration", SMOOTH_SCROLL_DURATION.into()),
                    ("offset", ANCHOR_SCROLL_OFFSET.into()),
                ]);
                lenis.scroll_to(target, &options);
            }
            Self::Native => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

fn drive(lenis: &Lenis, gsap: Option<Gsap>) {
    if let Some(gsap) = gsap {
        if let Some(update) = gsap.trigger_update() {
            lenis.on("scroll", &update);
        }
        let ticked = lenis.clone();
        if gsap.on_tick(move |time| ticked.raf(time)) {
            return;
        }
    }

    let ticked = lenis.clone();
    dom::animation_loop(move |time| ticked.raf(time));
}

fn set_root_scroll_behavior(behavior: &str) {
    if let Some(root) = dom::document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
    {
        dom::set_style(&root, "scroll-behavior", behavior);
    }
}

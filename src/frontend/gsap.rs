//! Bindings to the GSAP globals loaded by `index.html`.
//!
//! Every call is imported with `catch`, so a missing library surfaces as an
//! `Err` instead of a trap. [`Gsap::detect`] is the only way to get a handle.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{prelude::*, JsCast};

use crate::dom::global_defined;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(targets: &JsValue, from: &Object, to: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["gsap", "ticker"], js_name = add)]
    fn ticker_add(callback: &Function) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["gsap", "ticker"], js_name = lagSmoothing)]
    fn ticker_lag_smoothing(threshold: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["gsap", "globalTimeline"], js_name = timeScale)]
    fn global_time_scale(scale: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = create)]
    fn scroll_trigger_create(vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = refresh)]
    fn scroll_trigger_refresh() -> Result<(), JsValue>;
}

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("gsap {what} failed: {err:?}");
            None
        }
    }
}

/// Proof that `gsap` is loaded. `scroll_trigger` records whether the
/// ScrollTrigger plugin registered as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gsap {
    scroll_trigger: bool,
}

impl Gsap {
    pub fn detect() -> Option<Self> {
        if !global_defined("gsap") {
            log::warn!("gsap not loaded; scroll animations disabled");
            return None;
        }

        let plugin = Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger"))
            .ok()
            .filter(|plugin| !plugin.is_undefined());
        let scroll_trigger = match plugin {
            Some(plugin) => warn_on_err("registerPlugin", register_plugin(&plugin)).is_some(),
            None => {
                log::warn!("ScrollTrigger not loaded; reveal triggers disabled");
                false
            }
        };

        Some(Self { scroll_trigger })
    }

    pub fn has_scroll_trigger(self) -> bool {
        self.scroll_trigger
    }

    pub fn set(self, targets: &JsValue, vars: &Object) {
        warn_on_err("set", gsap_set(targets, vars));
    }

    pub fn from(self, targets: &JsValue, vars: &Object) {
        warn_on_err("from", gsap_from(targets, vars));
    }

    pub fn to(self, targets: &JsValue, vars: &Object) {
        warn_on_err("to", gsap_to(targets, vars));
    }

    pub fn from_to(self, targets: &JsValue, from: &Object, to: &Object) {
        warn_on_err("fromTo", gsap_from_to(targets, from, to));
    }

    /// Registers a trigger; returns whether it took.
    pub fn create_trigger(self, vars: &Object) -> bool {
        self.scroll_trigger && warn_on_err("ScrollTrigger.create", scroll_trigger_create(vars)).is_some()
    }

    pub fn refresh_triggers(self) {
        if self.scroll_trigger {
            warn_on_err("ScrollTrigger.refresh", scroll_trigger_refresh());
        }
    }

    /// `ScrollTrigger.update`, for libraries that drive scrolling themselves.
    pub fn trigger_update(self) -> Option<Function> {
        if !self.scroll_trigger {
            return None;
        }
        let plugin = Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger")).ok()?;
        Reflect::get(&plugin, &JsValue::from_str("update"))
            .ok()?
            .dyn_into()
            .ok()
    }

    /// Drives `tick` from the GSAP ticker with lag smoothing off. The callback
    /// receives the ticker time in milliseconds.
    pub fn on_tick(self, mut tick: impl FnMut(f64) + 'static) -> bool {
        let callback = Closure::<dyn FnMut(f64)>::new(move |seconds: f64| tick(seconds * 1000.0));
        let added = warn_on_err("ticker.add", ticker_add(callback.as_ref().unchecked_ref())).is_some();
        if added {
            callback.forget();
            warn_on_err("ticker.lagSmoothing", ticker_lag_smoothing(0.0));
        }
        added
    }

    pub fn time_scale(self, scale: f64) {
        warn_on_err("globalTimeline.timeScale", global_time_scale(scale));
    }
}

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::config::{TYPED_BACK_DELAY_MS, TYPED_BACK_SPEED_MS, TYPED_SPEED_MS, TYPED_STRINGS};
use crate::dom::{self, object};

#[wasm_bindgen]
extern "C" {
    pub type Typed;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Typed, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Typed);
}

/// Starts the typing effect on `selector`, if the element and Typed.js exist.
pub fn start(selector: &str) -> Option<Typed> {
    dom::query(selector)?;

    let strings: Array = TYPED_STRINGS.iter().map(|s| JsValue::from_str(s)).collect();
    let options = object(&[
        ("strings", strings.into()),
        ("typeSpeed", TYPED_SPEED_MS.into()),
        ("backSpeed", TYPED_BACK_SPEED_MS.into()),
        ("backDelay", TYPED_BACK_DELAY_MS.into()),
        ("loop", true.into()),
    ]);

    match Typed::new(selector, &options) {
        Ok(typed) => Some(typed),
        Err(err) => {
            log::warn!("typed text unavailable: {err:?}");
            None
        }
    }
}

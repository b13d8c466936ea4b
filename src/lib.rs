//! Personal portfolio site and its drive-around demo page.
//!
//! Page logic lives in target-independent modules so it can be tested
//! natively; the browser glue in [`frontend`], [`dom`] and the demo scene is
//! only compiled for `wasm32`.

pub mod catalogue;
pub mod config;
pub mod demo;
pub mod filter;
pub mod menu;
pub mod scroll;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod frontend;

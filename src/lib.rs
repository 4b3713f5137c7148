//! Wordfall Engine - bubble layout physics in WASM
//!
//! The journaling UI owns the entry list, rendering and input; this crate
//! owns the falling-bubble simulation behind the home screen:
//! - physics/ - Verlet bodies, collision relaxation, wall/floor bounds
//! - domain/  - descriptor boundary types and bubble sizing
//! - engine/  - registry reconciliation, frame pipeline, snapshot ABI

pub mod physics;
pub mod domain;
pub mod engine;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🫧 Wordfall WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::BubbleDescriptor;
pub use engine::{Engine, EngineCore, PerfStats, SNAPSHOT_STRIDE};

//! Hosts for the glyphlife engine: a wasm-bindgen binding for the browser
//! page, and the terminal/headless runners used by the `glyphlife` binary.

#[cfg(not(target_arch = "wasm32"))]
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

pub use glyphlife_core as engine;
pub use glyphlife_core::{EngineConfig, EngineError, Seeding, Universe, UniverseStats};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser-facing handle. The page owns the animation loop and calls
/// `render` then `tick` once per frame, and `printLetter` on key presses.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = Universe)]
pub struct WasmUniverse {
    inner: Universe,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_class = Universe)]
impl WasmUniverse {
    /// Sizes arrive as floats (`innerWidth / 6.1`) and are truncated.
    pub fn new(width: f64, height: f64) -> Result<WasmUniverse, JsValue> {
        console_error_panic_hook::set_once();

        let dims = glyphlife_core::Dimensions::from_f64(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let inner = Universe::with_dimensions(dims, &EngineConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmUniverse { inner })
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }

    /// Key-press hook: paints `c` onto `count` random cells.
    #[wasm_bindgen(js_name = printLetter)]
    pub fn print_letter(&mut self, count: u32, c: char) {
        self.inner.write_glyphs(count as usize, c);
    }

    /// Stamps `c` in the bitmap font at letter slot `slot`.
    #[wasm_bindgen(js_name = stampLetter)]
    pub fn stamp_letter(&mut self, slot: u32, c: char) {
        self.inner.print_letter(slot, c);
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn generation(&self) -> f64 {
        self.inner.generation() as f64
    }

    pub fn population(&self) -> u32 {
        self.inner.population() as u32
    }

    #[wasm_bindgen(js_name = clearGlyphs)]
    pub fn clear_glyphs(&mut self) {
        self.inner.clear_glyphs();
    }
}

pub mod runner;

pub use runner::FlightRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use jetpack_engine::InputEvent;

thread_local! {
    static RUNNER: RefCell<FlightRunner> = RefCell::new(FlightRunner::default());
}

fn with_runner<R>(f: impl FnOnce(&mut FlightRunner) -> R) -> R {
    RUNNER.with(|cell| f(&mut cell.borrow_mut()))
}

/// Register an image the host has decoded. Returns the id used in draw calls.
#[wasm_bindgen]
pub fn game_register_image(name: &str) -> u32 {
    with_runner(|r| r.register_image(name))
}

/// Register a font file the host can rasterize.
#[wasm_bindgen]
pub fn game_register_font(path: &str) -> u32 {
    with_runner(|r| r.register_font(path))
}

/// Resolve all assets and start the session. An error here is fatal for the page.
#[wasm_bindgen]
pub fn game_init(manifest_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"jetpack: logger already installed".into());
    }

    with_runner(|r| r.init(manifest_json)).map_err(|e| {
        log::error!("jetpack: startup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    log::info!("jetpack: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn game_tick(dt: f64) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

/// Text for the `index`-th text instance of the current frame.
#[wasm_bindgen]
pub fn get_label(index: u32) -> Option<String> {
    with_runner(|r| r.label(index as usize).map(str::to_string))
}

/// World → screen matrix `[a, b, c, d, tx, ty]`.
#[wasm_bindgen]
pub fn get_view() -> Vec<f32> {
    with_runner(|r| r.view().to_vec())
}

#[wasm_bindgen]
pub fn get_clear_color() -> Vec<f32> {
    with_runner(|r| r.clear_color().to_vec())
}

#[wasm_bindgen]
pub fn get_font_size(font: u32) -> f32 {
    with_runner(|r| r.font_size(font))
}

#[wasm_bindgen]
pub fn get_focus_x() -> f64 {
    with_runner(|r| r.last_frame().map_or(r.config().viewport_center().x, |f| f.focus.x))
}

#[wasm_bindgen]
pub fn get_focus_y() -> f64 {
    with_runner(|r| r.last_frame().map_or(r.config().viewport_center().y, |f| f.focus.y))
}

#[wasm_bindgen]
pub fn get_viewport_width() -> f64 {
    with_runner(|r| r.config().viewport.x)
}

#[wasm_bindgen]
pub fn get_viewport_height() -> f64 {
    with_runner(|r| r.config().viewport.y)
}

#[wasm_bindgen]
pub fn get_title() -> String {
    with_runner(|r| r.config().title.clone())
}

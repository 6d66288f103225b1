pub mod runner;

pub use runner::{FramePacker, OrreryRunner};

use std::cell::RefCell;

use orrery::{BodyId, Command};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner. `None` before `orrery_init` succeeds.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn push(command: Command) {
    if with_runner(|r| r.push(command)).is_none() {
        log::warn!("orrery not initialized; dropped {:?}", command);
    }
}

/// Build the orrery. An empty string loads the built-in solar system.
/// Returns false when the manifest is rejected.
#[wasm_bindgen]
pub fn orrery_init(manifest_json: &str) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = if manifest_json.trim().is_empty() {
        OrreryRunner::solar_system()
    } else {
        OrreryRunner::from_manifest_json(manifest_json)
    };

    match runner {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("orrery: initialized");
            true
        }
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("orrery: {e}")));
            false
        }
    }
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Commands ----

#[wasm_bindgen]
pub fn orrery_set_paused(paused: bool) {
    push(Command::SetPaused(paused));
}

#[wasm_bindgen]
pub fn orrery_toggle_pause() {
    push(Command::TogglePause);
}

#[wasm_bindgen]
pub fn orrery_set_speed_multiplier(body: u32, value: f64) {
    push(Command::SetSpeedMultiplier { body: BodyId(body), value });
}

#[wasm_bindgen]
pub fn orrery_request_focus(body: u32) {
    push(Command::RequestFocus(BodyId(body)));
}

#[wasm_bindgen]
pub fn orrery_request_reset() {
    push(Command::RequestReset);
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    push(Command::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    push(Command::PointerDown { x, y });
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    push(Command::PointerUp { x, y });
}

#[wasm_bindgen]
pub fn orrery_pointer_click(x: f32, y: f32) {
    push(Command::PointerClick { x, y });
}

#[wasm_bindgen]
pub fn orrery_pointer_leave() {
    push(Command::PointerLeave);
}

#[wasm_bindgen]
pub fn orrery_zoom(direction: f32) {
    push(Command::Zoom { direction });
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32) {
    push(Command::Resize { width, height });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
}

/// `[[id, name], ...]` for the star and the orbiting bodies.
#[wasm_bindgen]
pub fn orrery_body_names() -> js_sys::Array {
    let out = js_sys::Array::new();
    with_runner(|r| {
        for (id, name) in r.body_names() {
            let pair = js_sys::Array::of2(&JsValue::from(id), &JsValue::from_str(&name));
            out.push(&pair);
        }
    });
    out
}

/// Body id for a name, or -1.
#[wasm_bindgen]
pub fn orrery_body_id(name: &str) -> i32 {
    with_runner(|r| r.body_id(name))
        .flatten()
        .map(|id| id.0 as i32)
        .unwrap_or(-1)
}

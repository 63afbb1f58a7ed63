//! WASM bridge for the CueTips pool assistant — camera capture and upload on
//! one side, cue-angle control and simulation overlay on the other.
//!
//! All state lives in a `thread_local!` `RefCell`; DOM event handlers reach
//! it through `with_app`. The headless logic (session transitions, angle
//! validation, drag math, wire types) is in `cuetips-core`.

mod app;
mod camera;
mod net;
mod overlay;
mod page;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use app::CueTipsApp;

thread_local! {
    static APP: RefCell<Option<CueTipsApp>> = RefCell::new(None);
}

/// Run a closure against the mounted app.
fn with_app<R>(f: impl FnOnce(&mut CueTipsApp) -> R) -> R {
    APP.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let app = borrow
            .as_mut()
            .expect("App not mounted. Call app_init() first.");
        f(app)
    })
}

/// Mount the UI into the host page and wire up event handlers. Call once.
///
/// The host page may override endpoints and tuning by setting
/// `window.__CUETIPS_CONFIG` to a JSON string before the module loads.
#[wasm_bindgen]
pub fn app_init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = page::host_config();
    let mounted = page::mount(&document)?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(CueTipsApp::new(config, mounted));
    });

    let handles = with_app(|app| {
        app.page.sync_angle(app.cue.angle());
        app.page.clone()
    });
    page::attach(handles)?;

    log::info!("cuetips: initialized");
    Ok(())
}

//! DOM construction and event wiring for the single CueTips page.

use cuetips_core::{AppConfig, InputEvent};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, EventTarget, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlImageElement,
    HtmlInputElement, HtmlVideoElement, MouseEvent,
};

use crate::app;

/// Overlay canvas dimensions, matching the simulation service's viewbox.
pub const OVERLAY_WIDTH: u32 = 800;
pub const OVERLAY_HEIGHT: u32 = 400;

/// Handles to every element the app touches after mount.
#[derive(Clone)]
pub struct Page {
    pub video: HtmlVideoElement,
    /// Off-screen raster for frame capture.
    pub snapshot: HtmlCanvasElement,
    pub processed: HtmlImageElement,
    /// Host for the service's SVG markup.
    pub svg_host: HtmlElement,
    /// Cue-stick line and drag surface.
    pub overlay: HtmlCanvasElement,
    pub angle_input: HtmlInputElement,
    pub angle_readout: HtmlElement,
    pub validation: HtmlElement,
    pub upload_status: HtmlElement,
    pub start_button: HtmlButtonElement,
    pub stop_button: HtmlButtonElement,
    pub capture_button: HtmlButtonElement,
    pub simulate_button: HtmlButtonElement,
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str("unexpected element type"))
}

fn button(document: &Document, id: &str, label: &str) -> Result<HtmlButtonElement, JsValue> {
    let b: HtmlButtonElement = create(document, "button")?;
    b.set_id(id);
    b.set_text_content(Some(label));
    Ok(b)
}

/// Build the page inside `#cuetips` (created under `<body>` if absent).
pub fn mount(document: &Document) -> Result<Page, JsValue> {
    let root: HtmlElement = match document.get_element_by_id("cuetips") {
        Some(existing) => existing
            .dyn_into()
            .map_err(|_| JsValue::from_str("#cuetips is not an HTML element"))?,
        None => {
            let div: HtmlElement = create(document, "div")?;
            div.set_id("cuetips");
            document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&div)?;
            div
        }
    };

    let video: HtmlVideoElement = create(document, "video")?;
    video.set_id("cuetips-video");
    video.set_autoplay(true);
    video.set_muted(true);
    video.set_attribute("playsinline", "")?;
    video.set_hidden(true);
    root.append_child(&video)?;

    let processed: HtmlImageElement = create(document, "img")?;
    processed.set_id("cuetips-processed");
    processed.set_alt("Processed");
    processed.set_hidden(true);
    root.append_child(&processed)?;

    let svg_host: HtmlElement = create(document, "div")?;
    svg_host.set_id("cuetips-svg");
    root.append_child(&svg_host)?;

    let overlay: HtmlCanvasElement = create(document, "canvas")?;
    overlay.set_id("cuetips-overlay");
    overlay.set_width(OVERLAY_WIDTH);
    overlay.set_height(OVERLAY_HEIGHT);
    root.append_child(&overlay)?;

    let controls: HtmlElement = create(document, "div")?;
    controls.set_id("cuetips-controls");
    root.append_child(&controls)?;

    let label: HtmlElement = create(document, "label")?;
    label.set_text_content(Some("Cue Angle"));
    controls.append_child(&label)?;

    let angle_input: HtmlInputElement = create(document, "input")?;
    angle_input.set_id("cuetips-angle");
    angle_input.set_type("number");
    controls.append_child(&angle_input)?;

    let angle_readout: HtmlElement = create(document, "span")?;
    angle_readout.set_id("cuetips-angle-readout");
    controls.append_child(&angle_readout)?;

    let validation: HtmlElement = create(document, "div")?;
    validation.set_id("cuetips-validation");
    validation.set_hidden(true);
    controls.append_child(&validation)?;

    let start_button = button(document, "cuetips-start", "Open Camera")?;
    let stop_button = button(document, "cuetips-stop", "Stop Camera")?;
    stop_button.set_hidden(true);
    let capture_button = button(document, "cuetips-capture", "Take Photo")?;
    capture_button.set_disabled(true);
    let simulate_button = button(document, "cuetips-simulate", "Simulate Path")?;
    for b in [&start_button, &stop_button, &capture_button, &simulate_button] {
        controls.append_child(b)?;
    }

    let upload_status: HtmlElement = create(document, "div")?;
    upload_status.set_id("cuetips-status");
    upload_status.set_text_content(Some("Uploading..."));
    upload_status.set_hidden(true);
    root.append_child(&upload_status)?;

    let snapshot: HtmlCanvasElement = create(document, "canvas")?;
    snapshot.set_id("cuetips-snapshot");
    snapshot.set_hidden(true);
    root.append_child(&snapshot)?;

    Ok(Page {
        video,
        snapshot,
        processed,
        svg_host,
        overlay,
        angle_input,
        angle_readout,
        validation,
        upload_status,
        start_button,
        stop_button,
        capture_button,
        simulate_button,
    })
}

fn listen<E>(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Wire every handler. Buttons and the angle input dispatch directly; the
/// overlay surface feeds pointer events through the input queue.
pub fn attach(page: Page) -> Result<(), JsValue> {
    listen(&page.start_button, "click", |_: MouseEvent| {
        app::on_start_camera()
    })?;
    listen(&page.stop_button, "click", |_: MouseEvent| {
        app::on_stop_camera()
    })?;
    listen(&page.capture_button, "click", |_: MouseEvent| {
        app::on_capture_photo()
    })?;
    listen(&page.simulate_button, "click", |_: MouseEvent| {
        app::on_simulate()
    })?;

    {
        let input = page.angle_input.clone();
        listen(&page.angle_input, "change", move |_: web_sys::Event| {
            app::on_angle_input(&input.value());
        })?;
    }

    listen(&page.overlay, "mousedown", |e: MouseEvent| {
        app::on_pointer(InputEvent::PointerDown {
            x: e.offset_x() as f32,
            y: e.offset_y() as f32,
        });
    })?;
    listen(&page.overlay, "mousemove", |e: MouseEvent| {
        app::on_pointer(InputEvent::PointerMove {
            x: e.offset_x() as f32,
            y: e.offset_y() as f32,
        });
    })?;
    // Mouse-up lands on the window so a drag released off-canvas still ends.
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    listen(&window, "mouseup", |e: MouseEvent| {
        app::on_pointer(InputEvent::PointerUp {
            x: e.offset_x() as f32,
            y: e.offset_y() as f32,
        });
    })?;

    Ok(())
}

impl Page {
    /// Swap the start/stop buttons, gate the capture button, and hide the
    /// stale processed image while the preview is live.
    pub fn set_streaming(&self, streaming: bool) {
        self.capture_button.set_disabled(!streaming);
        self.start_button.set_hidden(streaming);
        self.stop_button.set_hidden(!streaming);
        self.video.set_hidden(!streaming);
        if streaming {
            self.processed.set_hidden(true);
        }
    }

    pub fn set_uploading(&self, uploading: bool) {
        self.upload_status.set_hidden(!uploading);
    }

    /// Show the processed frame as a data URL, if one exists.
    pub fn show_processed(&self, image: Option<&str>) {
        if let Some(b64) = image {
            self.processed.set_src(&format!("data:image/png;base64,{}", b64));
            self.processed.set_hidden(false);
        }
    }

    pub fn set_validation(&self, message: Option<&str>) {
        match message {
            Some(m) => {
                self.validation.set_text_content(Some(m));
                self.validation.set_hidden(false);
            }
            None => {
                self.validation.set_text_content(None);
                self.validation.set_hidden(true);
            }
        }
    }

    /// Reflect the controller's angle in both the input and the readout.
    pub fn sync_angle(&self, angle: f32) {
        self.angle_input.set_value(&format!("{:.1}", angle));
        self.angle_readout
            .set_text_content(Some(&format!("{:.1}°", angle)));
    }
}

/// Read an `AppConfig` override from `window.__CUETIPS_CONFIG` (a JSON
/// string set by the host page before the module loads).
pub fn host_config() -> AppConfig {
    let raw = web_sys::window().and_then(|w| {
        js_sys::Reflect::get(&w, &JsValue::from_str("__CUETIPS_CONFIG"))
            .ok()?
            .as_string()
    });
    match raw {
        Some(json) => match AppConfig::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid host config, using defaults: {}", err);
                AppConfig::default()
            }
        },
        None => AppConfig::default(),
    }
}

/// Blocking failure notice, matching the service-error UX of the original
/// page.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

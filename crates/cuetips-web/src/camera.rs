//! Device camera access: acquisition, release, and frame snapshot.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// Request exclusive access to a video input device, preferring the
/// rear-facing camera on mobile.
pub async fn acquire() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;

    let video = Object::new();
    Reflect::set(
        &video,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str("environment"),
    )?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video.into());

    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream = JsFuture::from(promise).await?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| JsValue::from_str("getUserMedia returned a non-stream"))
}

/// Stop every track so the device is released and its light goes off.
pub fn release(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Draw the current preview frame into the snapshot canvas at the video's
/// native resolution.
pub fn snapshot(video: &HtmlVideoElement, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
}

/// Encode the canvas contents as a PNG blob.
///
/// `toBlob` is callback-based, so it is wrapped in a promise here.
pub async fn to_png_blob(canvas: &HtmlCanvasElement) -> Result<Blob, JsValue> {
    let canvas = canvas.clone();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let cb = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if let Err(err) = canvas.to_blob_with_type(cb.unchecked_ref(), "image/png") {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let value = JsFuture::from(promise).await?;
    value
        .dyn_into::<Blob>()
        .map_err(|_| JsValue::from_str("canvas produced no blob"))
}

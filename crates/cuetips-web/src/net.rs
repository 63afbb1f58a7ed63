//! HTTP calls to the external detection/simulation service.

use cuetips_core::{ErrorBody, SimRequest, SimResponse, UploadResponse};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Headers, RequestInit, Response};

/// Why a request to the service failed. All variants are recoverable and
/// surfaced to the user at the call site.
#[derive(Debug, Error)]
pub enum NetError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-success status; the service's message is shown as-is.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 200 whose body does not match the wire contract.
    #[error("unexpected response body: {0}")]
    Payload(#[from] serde_json::Error),
}

fn js_error(err: JsValue) -> NetError {
    NetError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// POST and collect (status, body text).
async fn send(url: &str, init: &RequestInit) -> Result<(u16, String), NetError> {
    let window = web_sys::window().ok_or_else(|| NetError::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str_and_init(url, init))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| NetError::Transport("fetch returned a non-response".into()))?;
    let status = resp.status();
    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();
    Ok((status, body))
}

/// Upload the captured frame as multipart form data (field `file`).
/// Returns the base64 `image` payload on HTTP 200.
pub async fn post_upload(url: &str, blob: &Blob) -> Result<String, NetError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", blob, "captured-image.png")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());

    let (status, body) = send(url, &init).await?;
    if status != 200 {
        return Err(NetError::Status {
            status,
            message: body,
        });
    }
    Ok(UploadResponse::from_json(&body)?.image)
}

/// Submit the cue angle for simulation. Returns the parsed result on 200;
/// non-200 statuses carry the service's `message`.
pub async fn post_sim(url: &str, cue_angle: f32) -> Result<SimResponse, NetError> {
    let payload = SimRequest { cue_angle }.to_json()?;

    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&payload));

    let (status, body) = send(url, &init).await?;
    if status != 200 {
        return Err(NetError::Status {
            status,
            message: ErrorBody::message_from_json(&body),
        });
    }
    Ok(SimResponse::from_json(&body)?)
}

use cuetips_core::{
    AppConfig, CaptureSession, CueController, InputEvent, InputQueue, SimResult, UploadOutcome,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, MediaStream};

use crate::page::Page;
use crate::{camera, net, overlay, page, with_app};

/// Everything the page owns: headless state plus the mounted DOM handles.
pub struct CueTipsApp {
    pub config: AppConfig,
    pub session: CaptureSession<MediaStream>,
    pub cue: CueController,
    pub input: InputQueue,
    pub page: Page,
}

impl CueTipsApp {
    pub fn new(config: AppConfig, page: Page) -> Self {
        let cue = CueController::from_config(&config);
        Self {
            config,
            session: CaptureSession::new(),
            cue,
            input: InputQueue::new(),
            page,
        }
    }

    /// Hand an acquired stream to the session and bind the preview.
    fn camera_started(&mut self, stream: MediaStream) {
        let preview = stream.clone();
        if let Some(extra) = self.session.start(stream) {
            // A stream is already live; release the newcomer immediately.
            camera::release(&extra);
            return;
        }
        self.page.video.set_src_object(Some(&preview));
        self.page.set_streaming(true);
    }

    /// Release the held stream and detach the preview. Idempotent.
    fn stop_camera(&mut self) {
        if let Some(stream) = self.session.stop() {
            camera::release(&stream);
            self.page.video.set_src_object(None);
        }
        self.page.set_streaming(false);
    }

    /// Drain pending pointer events into the cue controller and refresh the
    /// angle display when a drag touched it.
    fn pump_input(&mut self) {
        let events = self.input.drain();
        if events.is_empty() {
            return;
        }
        let was_dragging = self.cue.dragging();
        for event in events {
            self.cue.apply(event);
        }
        if was_dragging || self.cue.dragging() {
            self.page.sync_angle(self.cue.angle());
        }
    }
}

/// "Open Camera" clicked: acquire a device stream, then bind it.
pub fn on_start_camera() {
    spawn_local(async {
        match camera::acquire().await {
            Ok(stream) => with_app(|app| app.camera_started(stream)),
            // Permission denial and device absence land here. Non-fatal.
            Err(err) => log::error!("Error accessing webcam: {:?}", err),
        }
    });
}

/// "Stop Camera" clicked.
pub fn on_stop_camera() {
    with_app(|app| app.stop_camera());
}

/// "Take Photo" clicked: snapshot the preview frame, stop the camera, and
/// upload the encoded PNG. Stopping and uploading are independent.
pub fn on_capture_photo() {
    let ready = with_app(|app| {
        if !app.session.streaming() {
            return None;
        }
        if let Err(err) = camera::snapshot(&app.page.video, &app.page.snapshot) {
            log::error!("frame snapshot failed: {:?}", err);
            return None;
        }
        app.stop_camera();
        Some((app.page.snapshot.clone(), app.config.upload_url.clone()))
    });
    let Some((canvas, url)) = ready else {
        return;
    };
    spawn_local(async move {
        match camera::to_png_blob(&canvas).await {
            Ok(blob) => upload_image(url, blob).await,
            Err(err) => log::error!("PNG encode failed: {:?}", err),
        }
    });
}

/// Upload one captured frame. The uploading flag is cleared on every exit
/// path through the single `finish_upload` below.
async fn upload_image(url: String, blob: Blob) {
    let started = with_app(|app| {
        let started = app.session.begin_upload(blob.size() as usize);
        if started {
            app.page.set_uploading(true);
        }
        started
    });
    if !started {
        return;
    }

    let outcome = match net::post_upload(&url, &blob).await {
        Ok(image) => UploadOutcome::Processed(image),
        Err(err) => {
            log::error!("upload failed: {}", err);
            page::alert(&format!("Error uploading image: {}", err));
            UploadOutcome::Failed
        }
    };

    with_app(|app| {
        app.session.finish_upload(outcome);
        app.page.set_uploading(false);
        app.page.show_processed(app.session.processed_image());
    });
}

/// "Simulate Path" clicked: POST the current angle, render the result.
pub fn on_simulate() {
    let (url, angle) = with_app(|app| (app.config.sim_url.clone(), app.cue.angle()));
    spawn_local(async move {
        match net::post_sim(&url, angle).await {
            Ok(resp) => with_app(|app| {
                app.cue.store_result(SimResult {
                    svg: resp.svg,
                    cue: resp.cue,
                });
                if let Err(err) = overlay::render(&app.page, app.cue.last_result()) {
                    log::error!("overlay render failed: {:?}", err);
                }
            }),
            // The prior result (if any) stays on screen.
            Err(err) => {
                log::error!("simulation request failed: {}", err);
                page::alert(&format!("Error during simulation: {}", err));
            }
        }
    });
}

/// Manual angle entry changed. A rejected entry keeps the typed text in
/// place so it can be corrected; only the message changes.
pub fn on_angle_input(raw: &str) {
    with_app(|app| match app.cue.set_angle_from_input(raw) {
        Ok(angle) => {
            app.page.set_validation(None);
            app.page.sync_angle(angle);
        }
        Err(err) => app.page.set_validation(Some(&err.to_string())),
    });
}

/// Pointer event from the overlay surface.
pub fn on_pointer(event: InputEvent) {
    with_app(|app| {
        app.input.push(event);
        app.pump_input();
    });
}

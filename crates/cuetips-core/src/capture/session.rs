/// One camera acquisition, from start through stop/capture.
///
/// Generic over the stream handle so the logic stays headless: the browser
/// bridge instantiates `S = web_sys::MediaStream`, tests use a plain marker
/// type. The handle is owned exclusively while streaming and is only
/// reachable again through [`CaptureSession::stop`], so release on every
/// exit path is a matter of ownership rather than null-checks.
pub struct CaptureSession<S> {
    stream: Option<S>,
    uploading: bool,
    processed_image: Option<String>,
}

/// How one upload attempt resolved, as seen by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// HTTP 200 with a decoded `image` payload (base64 PNG).
    Processed(String),
    /// Transport failure or non-200 status; the prior image is kept.
    Failed,
}

impl<S> CaptureSession<S> {
    pub fn new() -> Self {
        Self {
            stream: None,
            uploading: false,
            processed_image: None,
        }
    }

    /// Take exclusive ownership of a live stream.
    ///
    /// If a stream is already held, the incoming handle is handed back to
    /// the caller for release — only one live stream ever exists.
    pub fn start(&mut self, stream: S) -> Option<S> {
        if self.stream.is_some() {
            log::warn!("start requested while a stream is already held");
            return Some(stream);
        }
        self.stream = Some(stream);
        None
    }

    /// Give the held stream back to the caller so its tracks can be
    /// released. Idempotent: stopping with no stream held returns `None`.
    pub fn stop(&mut self) -> Option<S> {
        self.stream.take()
    }

    pub fn streaming(&self) -> bool {
        self.stream.is_some()
    }

    /// Mark an upload in flight. Returns false (and changes nothing) for an
    /// empty payload or when an upload is already running.
    pub fn begin_upload(&mut self, payload_len: usize) -> bool {
        if payload_len == 0 {
            log::warn!("skipping upload of empty capture");
            return false;
        }
        if self.uploading {
            log::warn!("skipping upload while another is in flight");
            return false;
        }
        self.uploading = true;
        true
    }

    /// Resolve the in-flight upload. The uploading flag is cleared on every
    /// outcome; only a successful one replaces the processed image.
    pub fn finish_upload(&mut self, outcome: UploadOutcome) {
        self.uploading = false;
        if let UploadOutcome::Processed(image) = outcome {
            self.processed_image = Some(image);
        }
    }

    pub fn uploading(&self) -> bool {
        self.uploading
    }

    /// Base64 PNG payload from the most recent successful upload.
    pub fn processed_image(&self) -> Option<&str> {
        self.processed_image.as_deref()
    }
}

impl<S> Default for CaptureSession<S> {
    fn default() -> Self {
        Self::new()
    }
}

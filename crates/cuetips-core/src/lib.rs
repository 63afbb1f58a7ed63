pub mod capture;
pub mod config;
pub mod cue;
pub mod input;
pub mod protocol;

// Re-export key types at crate root for convenience
pub use capture::session::{CaptureSession, UploadOutcome};
pub use config::AppConfig;
pub use cue::controller::{AngleError, CueController, SimResult};
pub use cue::overlay::{cue_segment, CueSegment};
pub use input::queue::{InputEvent, InputQueue};
pub use protocol::wire::{CueGeometry, ErrorBody, SimRequest, SimResponse, UploadResponse};

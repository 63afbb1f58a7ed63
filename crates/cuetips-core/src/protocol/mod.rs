pub mod wire;

pub use wire::{CueGeometry, ErrorBody, SimRequest, SimResponse, UploadResponse};

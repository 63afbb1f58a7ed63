pub mod controller;
pub mod overlay;

pub use controller::{AngleError, CueController, SimResult};
pub use overlay::{cue_segment, CueSegment};

use thiserror::Error;

use crate::config::AppConfig;
use crate::cue::overlay::{cue_segment, CueSegment};
use crate::input::queue::InputEvent;
use crate::protocol::wire::CueGeometry;

/// Cue angle domain in degrees.
pub const ANGLE_MIN: f32 = 0.0;
pub const ANGLE_MAX: f32 = 180.0;

/// Why a manual angle entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AngleError {
    #[error("Angle must be a number")]
    NotANumber,
    #[error("Angle must be between 0 and 180 degrees")]
    OutOfRange,
}

/// The most recent `/sim` response, kept for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SimResult {
    /// Trajectory overlay markup, rendered as-is.
    pub svg: String,
    /// Cue-stick placement for the overlay line.
    pub cue: CueGeometry,
}

/// Cue-angle state: manual entry with validation, drag-to-rotate, and the
/// last simulation result.
///
/// The angle is always within [`ANGLE_MIN`, `ANGLE_MAX`]; rejected input
/// and out-of-range drag candidates leave it at its prior valid value.
pub struct CueController {
    angle: f32,
    sensitivity: f32,
    dragging: bool,
    drag_origin_x: f32,
    drag_origin_angle: f32,
    error: Option<AngleError>,
    last_result: Option<SimResult>,
}

impl CueController {
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            angle: config.initial_angle.clamp(ANGLE_MIN, ANGLE_MAX),
            sensitivity: config.drag_sensitivity,
            dragging: false,
            drag_origin_x: 0.0,
            drag_origin_angle: 0.0,
            error: None,
            last_result: None,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// The message to show inline, if the last manual entry was rejected.
    pub fn validation_error(&self) -> Option<AngleError> {
        self.error
    }

    /// Parse and apply a manual angle entry.
    ///
    /// Rejection records the validation message and keeps the prior angle;
    /// acceptance clears it.
    pub fn set_angle_from_input(&mut self, raw: &str) -> Result<f32, AngleError> {
        let value: f32 = match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.error = Some(AngleError::NotANumber);
                return Err(AngleError::NotANumber);
            }
        };
        if !(ANGLE_MIN..=ANGLE_MAX).contains(&value) {
            self.error = Some(AngleError::OutOfRange);
            return Err(AngleError::OutOfRange);
        }
        self.error = None;
        self.angle = value;
        Ok(value)
    }

    /// Enter the dragging state, anchored at the pointer position and the
    /// current angle.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        self.dragging = true;
        self.drag_origin_x = pointer_x;
        self.drag_origin_angle = self.angle;
    }

    /// Rotate with the pointer while dragging.
    ///
    /// Candidates outside the domain are dropped: the angle holds at its
    /// last valid value and the drag continues.
    pub fn update_drag(&mut self, pointer_x: f32) {
        if !self.dragging {
            return;
        }
        let delta = pointer_x - self.drag_origin_x;
        let candidate = self.drag_origin_angle + delta * self.sensitivity;
        if (ANGLE_MIN..=ANGLE_MAX).contains(&candidate) {
            self.angle = candidate;
        }
    }

    /// Leave the dragging state. Idempotent.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Route a drained input event to the drag operations.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, .. } => self.begin_drag(x),
            InputEvent::PointerMove { x, .. } => self.update_drag(x),
            InputEvent::PointerUp { .. } => self.end_drag(),
        }
    }

    /// Keep a successful simulation response for rendering.
    pub fn store_result(&mut self, result: SimResult) {
        self.last_result = Some(result);
    }

    pub fn last_result(&self) -> Option<&SimResult> {
        self.last_result.as_ref()
    }

    /// Cue-stick segment for the stored geometry, if any.
    pub fn overlay_segment(&self) -> Option<CueSegment> {
        self.last_result.as_ref().map(|r| cue_segment(&r.cue))
    }
}

impl Default for CueController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_updates_angle_and_clears_error() {
        let mut cue = CueController::new();
        cue.set_angle_from_input("banana").unwrap_err();
        assert_eq!(cue.set_angle_from_input("90"), Ok(90.0));
        assert_eq!(cue.angle(), 90.0);
        assert_eq!(cue.validation_error(), None);
    }

    #[test]
    fn out_of_range_input_keeps_prior_angle() {
        let mut cue = CueController::new();
        assert_eq!(cue.angle(), 45.0);
        assert_eq!(cue.set_angle_from_input("200"), Err(AngleError::OutOfRange));
        assert_eq!(cue.angle(), 45.0);
        assert_eq!(
            cue.validation_error().unwrap().to_string(),
            "Angle must be between 0 and 180 degrees"
        );
    }

    #[test]
    fn non_numeric_input_keeps_prior_angle() {
        let mut cue = CueController::new();
        assert_eq!(cue.set_angle_from_input("abc"), Err(AngleError::NotANumber));
        assert_eq!(cue.angle(), 45.0);
        assert_eq!(cue.validation_error(), Some(AngleError::NotANumber));
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut cue = CueController::new();
        assert_eq!(cue.set_angle_from_input("0"), Ok(0.0));
        assert_eq!(cue.set_angle_from_input("180"), Ok(180.0));
    }

    #[test]
    fn drag_applies_half_a_degree_per_pixel() {
        let mut cue = CueController::new();
        cue.set_angle_from_input("45").unwrap();
        cue.begin_drag(100.0);
        cue.update_drag(140.0);
        assert_eq!(cue.angle(), 65.0);
    }

    #[test]
    fn out_of_range_drag_candidates_are_ignored() {
        let mut cue = CueController::new();
        cue.set_angle_from_input("170").unwrap();
        cue.begin_drag(0.0);
        cue.update_drag(30.0); // candidate 185: ignored
        assert_eq!(cue.angle(), 170.0);
        cue.update_drag(-400.0); // candidate -30: ignored
        assert_eq!(cue.angle(), 170.0);
    }

    #[test]
    fn drag_sticks_at_its_last_valid_value() {
        let mut cue = CueController::new();
        cue.set_angle_from_input("170").unwrap();
        cue.begin_drag(0.0);
        cue.update_drag(60.0); // candidate 200: ignored
        assert_eq!(cue.angle(), 170.0);
        cue.update_drag(16.0); // candidate 178: applied
        assert_eq!(cue.angle(), 178.0);
        cue.update_drag(400.0); // far out of range: ignored, drag continues
        assert_eq!(cue.angle(), 178.0);
        assert!(cue.dragging());
    }

    #[test]
    fn moves_without_a_drag_do_nothing() {
        let mut cue = CueController::new();
        cue.update_drag(500.0);
        assert_eq!(cue.angle(), 45.0);
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut cue = CueController::new();
        cue.begin_drag(10.0);
        cue.end_drag();
        cue.end_drag();
        assert!(!cue.dragging());
    }

    #[test]
    fn pointer_event_sequence_drives_a_drag() {
        let mut cue = CueController::new();
        cue.apply(InputEvent::PointerDown { x: 100.0, y: 50.0 });
        cue.apply(InputEvent::PointerMove { x: 140.0, y: 52.0 });
        cue.apply(InputEvent::PointerUp { x: 140.0, y: 52.0 });
        assert_eq!(cue.angle(), 65.0);
        assert!(!cue.dragging());
    }

    #[test]
    fn angle_stays_in_domain_across_arbitrary_sequences() {
        let mut cue = CueController::new();
        let xs = [0.0, 500.0, -500.0, 123.0, 360.0, -42.0, 90.0];
        cue.begin_drag(0.0);
        for &x in &xs {
            cue.update_drag(x);
            assert!((ANGLE_MIN..=ANGLE_MAX).contains(&cue.angle()));
        }
    }

    #[test]
    fn failed_simulation_leaves_prior_result() {
        let mut cue = CueController::new();
        assert!(cue.last_result().is_none());
        cue.store_result(SimResult {
            svg: "<svg/>".to_string(),
            cue: CueGeometry { start_x: 10.0, start_y: 10.0, length: 100.0, angle: 90.0 },
        });
        // A failed request never reaches store_result; the prior result stands.
        assert_eq!(cue.last_result().unwrap().svg, "<svg/>");
    }
}

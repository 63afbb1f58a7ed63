use glam::Vec2;

use crate::protocol::wire::CueGeometry;

/// Cue-stick line segment in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueSegment {
    pub start: Vec2,
    pub end: Vec2,
}

/// Compute the cue-stick segment for the given geometry.
///
/// The service reports 0° as "up" in screen space, so the angle is shifted
/// by 90° before the polar conversion:
/// `end = start + length · (cos θ, sin θ)` with `θ = (angle − 90) · π/180`.
pub fn cue_segment(geometry: &CueGeometry) -> CueSegment {
    let theta = (geometry.angle - 90.0).to_radians();
    let start = Vec2::new(geometry.start_x, geometry.start_y);
    let end = start + geometry.length * Vec2::new(theta.cos(), theta.sin());
    CueSegment { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn ninety_degrees_points_right() {
        let segment = cue_segment(&CueGeometry {
            start_x: 10.0,
            start_y: 10.0,
            length: 100.0,
            angle: 90.0,
        });
        assert_close(segment.start, Vec2::new(10.0, 10.0));
        assert_close(segment.end, Vec2::new(110.0, 10.0));
    }

    #[test]
    fn zero_degrees_points_up() {
        let segment = cue_segment(&CueGeometry {
            start_x: 10.0,
            start_y: 100.0,
            length: 80.0,
            angle: 0.0,
        });
        // Up in screen space means decreasing y.
        assert_close(segment.end, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn one_eighty_degrees_points_down() {
        let segment = cue_segment(&CueGeometry {
            start_x: 50.0,
            start_y: 50.0,
            length: 30.0,
            angle: 180.0,
        });
        assert_close(segment.end, Vec2::new(50.0, 80.0));
    }

    #[test]
    fn zero_length_collapses_to_the_start() {
        let segment = cue_segment(&CueGeometry {
            start_x: 7.0,
            start_y: 3.0,
            length: 0.0,
            angle: 45.0,
        });
        assert_close(segment.end, segment.start);
    }
}

//! Geometric types shared across the grid and checker APIs.

use glam::Vec2;

/// Robot pose in world coordinates (meters), yaw in radians.
///
/// Yaw is not normalized; callers may pass any angle.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Pose2 {
    pub position: Vec2,
    pub yaw: f32,
}

impl Pose2 {
    pub fn new(x: f32, y: f32, yaw: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            yaw,
        }
    }
}

/// Footprint: closed polygon in meters. The last vertex implicitly connects
/// back to the first; it is not repeated.
///
/// A valid footprint has at least 2 points. Snapshots with fewer points are
/// rejected by the checker as unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footprint {
    pub points: Vec<Vec2>,
}

impl Footprint {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Regular polygon approximating a circular robot of the given radius.
    pub fn from_radius(radius: f32, num_points: usize) -> Self {
        let points = (0..num_points)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / num_points as f32;
                Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Self { points }
    }

    /// Grow the polygon outward by a margin along each coordinate's sign
    /// (operator-adjustable safety padding).
    pub fn padded(&self, padding: f32) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| Vec2::new(pad(p.x, padding), pad(p.y, padding)))
            .collect();
        Self { points }
    }
}

fn pad(v: f32, padding: f32) -> f32 {
    if v > 0.0 {
        v + padding
    } else if v < 0.0 {
        v - padding
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec2;

    use super::Footprint;

    #[test]
    fn padded_grows_outward() {
        let footprint = Footprint::new(vec![
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
        ]);
        let padded = footprint.padded(0.1);
        assert_relative_eq!(padded.points[0].x, 0.6);
        assert_relative_eq!(padded.points[0].y, 0.6);
        assert_relative_eq!(padded.points[2].x, -0.6);
        assert_relative_eq!(padded.points[2].y, -0.6);
    }

    #[test]
    fn padded_leaves_axis_points_on_axis() {
        let footprint = Footprint::new(vec![Vec2::new(0.0, 0.3), Vec2::new(0.3, 0.0)]);
        let padded = footprint.padded(0.1);
        assert_relative_eq!(padded.points[0].x, 0.0);
        assert_relative_eq!(padded.points[1].y, 0.0);
    }

    #[test]
    fn from_radius_points_lie_on_circle() {
        let footprint = Footprint::from_radius(0.4, 16);
        assert_eq!(footprint.points.len(), 16);
        for p in &footprint.points {
            assert_relative_eq!(p.length(), 0.4, epsilon = 1e-5);
        }
    }
}

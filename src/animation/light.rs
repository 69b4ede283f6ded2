use crate::{
    animation::trajectory::{Pose, Trajectory},
    foundation::{
        core::{Color, Point, Viewport},
        error::{FolioError, FolioResult},
        math::cycle_progress,
    },
};

/// Fraction of a gradient's radius where it reaches full transparency.
pub const OUTER_STOP: f64 = 0.7;

/// One radial gradient of a light, in its rest pose.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    /// Normalized viewport position.
    pub center: Point,
    pub radius_px: f64,
    /// Color at the center; fades to transparent at [`OUTER_STOP`] of the radius.
    pub color: Color,
}

/// A moving spotlight made of overlapping gradients sharing one trajectory.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Light {
    pub duration_ms: f64,
    pub opacity: f64,
    pub gradients: Vec<Gradient>,
    pub trajectory: Trajectory,
}

/// A gradient resolved against a viewport at one instant, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGradient {
    pub center: Point,
    /// Radius of the transparent outer stop.
    pub fade_radius: f64,
    pub color: Color,
}

impl Light {
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(FolioError::validation("light duration_ms must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(FolioError::validation("light opacity must be within 0..=1"));
        }
        if self.gradients.is_empty() {
            return Err(FolioError::validation("light needs at least one gradient"));
        }
        for g in &self.gradients {
            if !(g.radius_px.is_finite() && g.radius_px > 0.0) {
                return Err(FolioError::validation("gradient radius_px must be > 0"));
            }
        }
        self.trajectory.validate()
    }

    pub fn pose_at(&self, time_ms: f64) -> Pose {
        self.trajectory
            .evaluate(cycle_progress(time_ms, self.duration_ms))
    }

    /// Gradients offset and scaled by the pose at `time_ms`, resolved against `viewport`.
    pub fn place(&self, time_ms: f64, viewport: Viewport) -> Vec<PlacedGradient> {
        let pose = self.pose_at(time_ms);
        self.gradients
            .iter()
            .map(|g| PlacedGradient {
                center: viewport.to_css(Point::new(g.center.x + pose.tx, g.center.y + pose.ty)),
                fade_radius: g.radius_px * pose.scale * OUTER_STOP,
                color: g.color,
            })
            .collect()
    }
}

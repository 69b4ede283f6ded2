use crate::foundation::{
    error::{FolioError, FolioResult},
    math::{lerp, wrap_unit},
};

/// Offset and scale applied to every gradient of a light at one instant.
///
/// `tx`/`ty` are in normalized viewport units and added to each gradient center; `scale`
/// multiplies each gradient radius.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub tx: f64,
    pub ty: f64,
    pub scale: f64,
}

impl Pose {
    /// Pose every trajectory starts and ends its cycle at.
    pub const REST: Pose = Pose {
        tx: 0.0,
        ty: 0.0,
        scale: 1.0,
    };

    pub const fn new(tx: f64, ty: f64, scale: f64) -> Self {
        Self { tx, ty, scale }
    }

    fn is_finite(self) -> bool {
        self.tx.is_finite() && self.ty.is_finite() && self.scale.is_finite()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            tx: lerp(a.tx, b.tx, t),
            ty: lerp(a.ty, b.ty, t),
            scale: lerp(a.scale, b.scale, t),
        }
    }
}

/// Periodic, piecewise-linear motion of a light over one cycle.
///
/// Every variant leaves [`Pose::REST`] at progress `0`, visits its key poses at the configured
/// breakpoints and returns to rest at progress `1`, so consecutive cycles join without a jump.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trajectory {
    /// rest -> peak -> trough -> rest.
    ThreeSegmentDrift {
        first_break: f64,
        second_break: f64,
        peak: Pose,
        trough: Pose,
    },
    /// rest -> peak -> rest.
    TwoSegmentDrift { midpoint: f64, peak: Pose },
}

impl Trajectory {
    /// Slow diagonal breathing drift of the main light (20s period in the default scene).
    pub const BREATHING_DRIFT: Trajectory = Trajectory::ThreeSegmentDrift {
        first_break: 0.33,
        second_break: 0.66,
        peak: Pose::new(0.15, 0.15, 1.25),
        trough: Pose::new(-0.15, -0.15, 0.85),
    };

    /// Counter-diagonal swell of the secondary light (30s period in the default scene).
    pub const SWELL_DRIFT: Trajectory = Trajectory::TwoSegmentDrift {
        midpoint: 0.5,
        peak: Pose::new(0.25, -0.25, 1.45),
    };

    /// Pose at `progress`, folded into `[0, 1)` first.
    pub fn evaluate(&self, progress: f64) -> Pose {
        let p = wrap_unit(progress);
        match *self {
            Self::ThreeSegmentDrift {
                first_break,
                second_break,
                peak,
                trough,
            } => {
                if p < first_break {
                    segment(&Pose::REST, &peak, p, 0.0, first_break)
                } else if p < second_break {
                    segment(&peak, &trough, p, first_break, second_break)
                } else {
                    segment(&trough, &Pose::REST, p, second_break, 1.0)
                }
            }
            Self::TwoSegmentDrift { midpoint, peak } => {
                if p < midpoint {
                    segment(&Pose::REST, &peak, p, 0.0, midpoint)
                } else {
                    segment(&peak, &Pose::REST, p, midpoint, 1.0)
                }
            }
        }
    }

    /// Interior segment boundaries, ascending.
    pub fn breakpoints(&self) -> Vec<f64> {
        match *self {
            Self::ThreeSegmentDrift {
                first_break,
                second_break,
                ..
            } => vec![first_break, second_break],
            Self::TwoSegmentDrift { midpoint, .. } => vec![midpoint],
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        let breaks = self.breakpoints();
        if !breaks.iter().all(|b| b.is_finite() && *b > 0.0 && *b < 1.0) {
            return Err(FolioError::validation(
                "trajectory breakpoints must lie strictly inside (0, 1)",
            ));
        }
        if !breaks.windows(2).all(|w| w[0] < w[1]) {
            return Err(FolioError::validation(
                "trajectory breakpoints must be strictly increasing",
            ));
        }
        let poses_finite = match *self {
            Self::ThreeSegmentDrift { peak, trough, .. } => peak.is_finite() && trough.is_finite(),
            Self::TwoSegmentDrift { peak, .. } => peak.is_finite(),
        };
        if !poses_finite {
            return Err(FolioError::validation("trajectory poses must be finite"));
        }
        Ok(())
    }
}

fn segment(from: &Pose, to: &Pose, p: f64, start: f64, end: f64) -> Pose {
    let span = end - start;
    if span <= 0.0 {
        return *to;
    }
    Pose::lerp(from, to, ((p - start) / span).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/trajectory.rs"]
mod tests;

use crate::{
    animation::blink::blink_opacity,
    foundation::{
        core::{Color, Point, Vec2},
        error::{FolioError, FolioResult},
        math::{cycle_progress, wrap_unit},
    },
};

/// A dust mote: drifts at constant velocity across a wrap-around viewport and blinks.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    /// Normalized position, always inside `[0, 1)` on both axes.
    pub position: Point,
    /// Normalized units per millisecond.
    pub velocity: Vec2,
    pub size_px: f64,
    pub blink_duration_ms: f64,
    pub blink_delay_ms: f64,
}

impl Particle {
    /// Move by `velocity * dt_ms`, wrapping toroidally. Negative or non-finite deltas are
    /// treated as zero.
    pub fn advance(&mut self, dt_ms: f64) {
        let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        let next = self.position + self.velocity * dt;
        self.position = Point::new(wrap_unit(next.x), wrap_unit(next.y));
    }

    pub fn blink_progress(&self, time_ms: f64) -> f64 {
        cycle_progress(time_ms + self.blink_delay_ms, self.blink_duration_ms)
    }

    pub fn opacity_at(&self, time_ms: f64) -> f64 {
        blink_opacity(self.blink_progress(time_ms))
    }
}

/// Ranges the particle population is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleSpawn {
    pub count: usize,
    /// Full width of the per-axis velocity range, centred on zero.
    pub velocity_spread: f64,
    pub size_min_px: f64,
    pub size_range_px: f64,
    pub blink_min_ms: f64,
    pub blink_range_ms: f64,
    pub delay_max_ms: f64,
    /// Color at full blink; the alpha here is the peak alpha.
    pub color: Color,
}

impl Default for ParticleSpawn {
    fn default() -> Self {
        Self {
            count: 100,
            velocity_spread: 0.00004,
            size_min_px: 10.0,
            size_range_px: 10.0,
            blink_min_ms: 6000.0,
            blink_range_ms: 4000.0,
            delay_max_ms: 8000.0,
            color: Color::rgba(251, 244, 254, 0.05),
        }
    }
}

impl ParticleSpawn {
    pub fn validate(&self) -> FolioResult<()> {
        let all_finite = [
            self.velocity_spread,
            self.size_min_px,
            self.size_range_px,
            self.blink_min_ms,
            self.blink_range_ms,
            self.delay_max_ms,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0);
        if !all_finite {
            return Err(FolioError::validation(
                "particle ranges must be finite and non-negative",
            ));
        }
        if self.blink_min_ms <= 0.0 {
            return Err(FolioError::validation("particle blink_min_ms must be > 0"));
        }
        Ok(())
    }

    /// Deterministic population for `seed`.
    pub fn spawn(&self, seed: u64) -> Vec<Particle> {
        let mut rng = fastrand::Rng::with_seed(seed);
        (0..self.count)
            .map(|_| Particle {
                position: Point::new(rng.f64(), rng.f64()),
                velocity: Vec2::new(
                    (rng.f64() - 0.5) * self.velocity_spread,
                    (rng.f64() - 0.5) * self.velocity_spread,
                ),
                size_px: self.size_min_px + rng.f64() * self.size_range_px,
                blink_duration_ms: self.blink_min_ms + rng.f64() * self.blink_range_ms,
                blink_delay_ms: rng.f64() * self.delay_max_ms,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/particle.rs"]
mod tests;

/// Opacity envelope a particle runs through once per blink cycle.
///
/// Linear fade in over `[0, fade_in_end)`, full opacity until `plateau_end`, linear fade out
/// until `fade_out_end`, transparent for the rest of the cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkEnvelope {
    pub fade_in_end: f64,
    pub plateau_end: f64,
    pub fade_out_end: f64,
}

impl BlinkEnvelope {
    pub const STANDARD: BlinkEnvelope = BlinkEnvelope {
        fade_in_end: 0.05,
        plateau_end: 0.25,
        fade_out_end: 0.50,
    };

    pub fn opacity(&self, progress: f64) -> f64 {
        let p = progress;
        if !(0.0..1.0).contains(&p) {
            return 0.0;
        }
        if p < self.fade_in_end {
            p / self.fade_in_end
        } else if p < self.plateau_end {
            1.0
        } else if p < self.fade_out_end {
            1.0 - (p - self.plateau_end) / (self.fade_out_end - self.plateau_end)
        } else {
            0.0
        }
    }
}

impl Default for BlinkEnvelope {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// [`BlinkEnvelope::STANDARD`] at `progress`.
pub fn blink_opacity(progress: f64) -> f64 {
    BlinkEnvelope::STANDARD.opacity(progress)
}

/// Position of `time` inside a repeating cycle of `duration`, in `[0, 1)`.
///
/// Negative times wrap the same way positive ones do. A non-positive or non-finite duration
/// yields `0.0`.
pub fn cycle_progress(time_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms.is_finite() && duration_ms > 0.0) || !time_ms.is_finite() {
        return 0.0;
    }
    wrap_unit(time_ms.rem_euclid(duration_ms) / duration_ms)
}

/// Fold any finite value into `[0, 1)`.
pub fn wrap_unit(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if w >= 1.0 { 0.0 } else { w }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

//! Numeric helpers shared by every calculator

/// Linearly rescale `value` from the `[min, max]` band into `0..=100`.
///
/// Values at or below `min` saturate to exactly 0 and values at or above `max`
/// saturate to exactly 100. The caller guarantees `max > min`; NaN passes
/// through unchanged because neither comparison holds for it.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if value <= min {
        return 0.0;
    }
    if value >= max {
        return 100.0;
    }
    (value - min) / (max - min) * 100.0
}

/// Round to two decimal places, halves rounding towards positive infinity.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers: clamping, angle conversion, increment rounding.

use std::f64::consts::TAU;

use crate::MathError;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}

/// Rounds `value` to the nearest multiple of `step`.
///
/// Ties round away from zero. `step` must be finite and strictly positive.
///
/// ```
/// use rigid_math::round_to_increment;
/// assert_eq!(round_to_increment(7.3, 0.5).unwrap(), 7.5);
/// assert!(round_to_increment(7.3, -0.5).is_err());
/// ```
pub fn round_to_increment(value: f64, step: f64) -> Result<f64, MathError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(MathError::InvalidArgument {
            name: "step",
            reason: format!("increment must be finite and positive, got {step}"),
        });
    }
    Ok((value / step).round() * step)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn deg_rad_roundtrip_basic_angles() {
        for deg in [0.0f64, 45.0, 90.0, 180.0, -90.0] {
            let back = rad_to_deg(deg_to_rad(deg));
            assert!((back - deg).abs() <= 1e-12, "{deg} -> {back}");
        }
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() <= 1e-15);
    }

    #[test]
    fn increment_rounding() {
        assert_eq!(round_to_increment(12.0, 5.0).unwrap(), 10.0);
        assert_eq!(round_to_increment(13.0, 5.0).unwrap(), 15.0);
        assert_eq!(round_to_increment(-13.0, 5.0).unwrap(), -15.0);
    }

    #[test]
    fn increment_rejects_bad_steps() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = round_to_increment(1.0, step).unwrap_err();
            assert!(matches!(err, MathError::InvalidArgument { name: "step", .. }));
        }
    }
}

//! Floating-point bridge for transcendental functions.
//!
//! [`Decimal`] has no native trigonometry,
//! so these helpers round-trip through `f64` and accept its precision.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

pub(crate) fn to_float(value: Decimal) -> f64 {
    value.to_f64().expect("every decimal is within the range of f64")
}

/// # Panics
/// If `value` is not finite or out of the range of [`Decimal`].
pub(crate) fn from_float(value: f64) -> Decimal {
    Decimal::from_f64(value).expect("trigonometric result must be finite and within decimal range")
}

pub(crate) fn sin(radians: Decimal) -> Decimal { from_float(to_float(radians).sin()) }

pub(crate) fn cos(radians: Decimal) -> Decimal { from_float(to_float(radians).cos()) }

pub(crate) fn tan(radians: Decimal) -> Decimal { from_float(to_float(radians).tan()) }

pub(crate) fn atan2(y: Decimal, x: Decimal) -> Decimal {
    from_float(to_float(y).atan2(to_float(x)))
}

pub(crate) fn hypot(x: Decimal, y: Decimal) -> Decimal {
    from_float(to_float(x).hypot(to_float(y)))
}

/// Returns the direction of the mean unit vector of the given angles, in radians.
///
/// The result is in the range `(-PI, PI]`. An empty input yields zero.
pub(crate) fn circular_mean(radians: impl IntoIterator<Item = Decimal>) -> Decimal {
    let (sin_sum, cos_sum) = radians.into_iter().fold((0., 0.), |(sin_sum, cos_sum), value| {
        let (sin, cos) = to_float(value).sin_cos();
        (sin_sum + sin, cos_sum + cos)
    });

    let mut mean = sin_sum.atan2(cos_sum);
    if mean <= -std::f64::consts::PI {
        mean = std::f64::consts::PI;
    }
    from_float(mean)
}

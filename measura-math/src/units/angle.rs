use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Angle, DEGREES_PER_RADIAN, Distance, PI, RADIANS_PER_DEGREE, TAU, trig};


pub(super) fn degrees_to_radians(degrees: Decimal) -> Decimal { degrees * RADIANS_PER_DEGREE }

pub(super) fn radians_to_degrees(radians: Decimal) -> Decimal { radians * DEGREES_PER_RADIAN }

impl Angle {
    /// A quarter turn.
    pub const RIGHT: Self = Self::new(dec!(1.5707963267948966192313216916));
    /// Half a turn.
    pub const STRAIGHT: Self = Self::new(PI);
    /// A full turn.
    pub const FULL: Self = Self::new(TAU);

    #[must_use]
    pub fn from_radians(radians: impl Into<Decimal>) -> Self { Self::new(radians.into()) }

    #[must_use]
    pub const fn into_radians(self) -> Decimal { self.0 }

    #[must_use]
    pub fn from_degrees(degrees: impl Into<Decimal>) -> Self {
        Self::new(degrees_to_radians(degrees.into()))
    }

    #[must_use]
    pub fn into_degrees(self) -> Decimal { radians_to_degrees(self.0) }

    #[must_use]
    pub fn sin(self) -> Decimal { trig::sin(self.0) }

    #[must_use]
    pub fn cos(self) -> Decimal { trig::cos(self.0) }

    #[must_use]
    pub fn tan(self) -> Decimal { trig::tan(self.0) }

    /// Returns the angle of the vector `(x, y)` from the positive x axis.
    #[must_use]
    pub fn atan2(y: impl Into<Decimal>, x: impl Into<Decimal>) -> Self {
        Self::new(trig::atan2(y.into(), x.into()))
    }

    /// Returns the angle of the displacement `(x, y)` from the positive x axis.
    #[must_use]
    pub fn from_distances(y: Distance, x: Distance) -> Self { y.atan2(x) }

    /// Computes the circular mean of the angles.
    ///
    /// Each angle is treated as a unit vector and the direction of their sum is returned,
    /// so that e.g. the mean of 179.5° and -179.5° is 180° rather than 0°.
    /// The result is always in the range `(-STRAIGHT, STRAIGHT]`,
    /// and is zero if `angles` is empty.
    #[must_use]
    pub fn average(angles: impl IntoIterator<Item = Self>) -> Self {
        Self::new(trig::circular_mean(angles.into_iter().map(|angle| angle.0)))
    }
}

use std::{fmt, ops};

use rust_decimal::Decimal;

use super::{Angle, Distance, HeadingSpeed, PI, TAU, Time, angle};
use crate::AssertApproxError;


/// An absolute direction, measured counter-clockwise from the positive x axis.
///
/// Unlike [`Angle`], a heading wraps around: every constructor and operator reduces the result
/// into `(-STRAIGHT, STRAIGHT]`, so `179° + 2°` is `-179°`.
/// For the same reason it does not implement [`BaseValue`](crate::BaseValue),
/// since the generic linear algorithms would not expect the reduction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Heading(
    Angle, // always -PI < heading <= PI
);

/// Reduces `radians` into `(-PI, PI]` by removing the nearest whole number of turns.
fn canonicalize(radians: Decimal) -> Decimal {
    let turns = (radians / TAU).round();
    let mut reduced = radians - turns * TAU;
    if reduced > PI {
        reduced -= TAU;
    } else if reduced <= -PI {
        reduced += TAU;
    }

    if !turns.is_zero() {
        tracing::trace!(%radians, %turns, %reduced, "wrapped heading");
    }
    reduced
}

impl Heading {
    /// Heading along the positive x axis.
    pub const ZERO: Self = Self(Angle::ZERO);

    /// Creates a heading from an unbounded angle in radians.
    #[must_use]
    pub fn from_radians(radians: impl Into<Decimal>) -> Self {
        Self(Angle::new(canonicalize(radians.into())))
    }

    /// Returns the heading in radians in the range `-PI < value <= PI`.
    #[must_use]
    pub const fn into_radians(self) -> Decimal { self.0.0 }

    #[must_use]
    pub fn from_degrees(degrees: impl Into<Decimal>) -> Self {
        Self::from_radians(angle::degrees_to_radians(degrees.into()))
    }

    /// Returns the heading in degrees in the range `-180 < value <= 180`.
    #[must_use]
    pub fn into_degrees(self) -> Decimal { self.0.into_degrees() }

    /// Returns the heading as an angle in the range `(-STRAIGHT, STRAIGHT]`.
    #[must_use]
    pub const fn into_angle(self) -> Angle { self.0 }

    /// Returns the heading of the vector `(x, y)`.
    #[must_use]
    pub fn atan2(y: impl Into<Decimal>, x: impl Into<Decimal>) -> Self {
        Self::from(Angle::atan2(y, x))
    }

    /// Returns the heading of the displacement `(x, y)`.
    #[must_use]
    pub fn from_distances(y: Distance, x: Distance) -> Self { Self::from(y.atan2(x)) }

    #[must_use]
    pub fn sin(self) -> Decimal { self.0.sin() }

    #[must_use]
    pub fn cos(self) -> Decimal { self.0.cos() }

    #[must_use]
    pub fn tan(self) -> Decimal { self.0.tan() }

    /// Returns the heading halfway between `self` and `other` along the shorter arc.
    ///
    /// Agrees with [`Heading::average`] of the two headings,
    /// except for exactly opposite headings where the midpoint is ambiguous.
    #[must_use]
    pub fn average_with(self, other: Self) -> Self {
        let (this, that) = (self.into_radians(), other.into_radians());
        if this.is_zero() || that.is_zero() || this.is_sign_negative() == that.is_sign_negative()
        {
            return Self::from_radians((this + that) / Decimal::TWO);
        }

        let difference = this - that;
        if difference.abs() < PI {
            Self::from_radians(that + difference / Decimal::TWO)
        } else {
            Self::from_radians(PI + that + difference / Decimal::TWO)
        }
    }

    /// Computes the circular mean of the headings.
    ///
    /// Returns [`Heading::ZERO`] if `headings` is empty.
    #[must_use]
    pub fn average(headings: impl IntoIterator<Item = Self>) -> Self {
        Self::from(Angle::average(headings.into_iter().map(Self::into_angle)))
    }

    /// Whether the shortest rotation between `self` and `other` is at most `max_delta`.
    #[must_use]
    pub fn is_close_to(self, other: Self, max_delta: Angle) -> bool {
        (self - other).into_radians().abs() <= max_delta.0
    }

    #[must_use]
    pub fn is_not_close_to(self, other: Self, max_delta: Angle) -> bool {
        !self.is_close_to(other, max_delta)
    }

    /// Returns the rotation from `current` to `setpoint`.
    #[must_use]
    pub fn heading_offset(setpoint: Self, current: Self) -> Self { setpoint - current }

    /// Applies an offset previously computed by [`Heading::heading_offset`].
    #[must_use]
    pub fn corrected_heading(current: Self, offset: Self) -> Self { current + offset }

    /// Asserts that the shortest rotation from `self` to `expect` is within `epsilon`.
    ///
    /// # Errors
    /// If the shortest rotation is greater than `epsilon`.
    pub fn assert_approx(
        self,
        expect: Self,
        epsilon: Angle,
    ) -> Result<(), AssertApproxError<Self, Angle>> {
        if self.is_close_to(expect, epsilon) {
            Ok(())
        } else {
            Err(AssertApproxError { actual: self, expect, epsilon })
        }
    }
}

impl Default for Heading {
    fn default() -> Self { Self::ZERO }
}

impl From<Angle> for Heading {
    fn from(angle: Angle) -> Self { Self::from_radians(angle.0) }
}

impl ops::Add for Heading {
    type Output = Self;

    fn add(self, other: Self) -> Self { self + other.0 }
}

impl ops::Sub for Heading {
    type Output = Self;

    fn sub(self, other: Self) -> Self { self - other.0 }
}

impl ops::Neg for Heading {
    type Output = Self;

    fn neg(self) -> Self { Self::from_radians(-self.0.0) }
}

impl ops::Add<Angle> for Heading {
    type Output = Self;

    fn add(self, angle: Angle) -> Self { Self::from_radians(self.0.0 + angle.0) }
}

impl ops::AddAssign<Angle> for Heading {
    fn add_assign(&mut self, angle: Angle) { *self = *self + angle; }
}

impl ops::Sub<Angle> for Heading {
    type Output = Self;

    fn sub(self, angle: Angle) -> Self { Self::from_radians(self.0.0 - angle.0) }
}

impl ops::SubAssign<Angle> for Heading {
    fn sub_assign(&mut self, angle: Angle) { *self = *self - angle; }
}

/// Average turn rate needed to sweep the heading within the given time.
impl ops::Div<Time> for Heading {
    type Output = HeadingSpeed;

    fn div(self, time: Time) -> HeadingSpeed { self.0 / time }
}

impl fmt::Debug for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heading")
            .field("radians", &self.into_radians())
            .field("degrees", &self.into_degrees())
            .finish()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_with_symbol(f, self.into_degrees(), Some(1), "\u{b0}")
    }
}

impl serde::Serialize for Heading {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Heading {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Angle as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

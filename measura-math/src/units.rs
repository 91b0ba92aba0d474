use std::marker::PhantomData;
use std::time::{Duration, Instant};
use std::{cmp, fmt, hash, iter, ops};

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{AssertApproxError, BaseValueMath};

mod angle;
mod display;
pub use display::{
    AccelUnit, AngleUnit, HeadingSpeedUnit, LengthUnit, SpeedUnit, TimeUnit, UnitEnum,
};
mod heading;
pub use heading::Heading;
mod point;
pub use point::{Point2D, Point3D};
mod serde_impl;
pub(crate) mod trig;

#[cfg(test)]
mod tests;

/// Converts meters to millimeters.
pub const MILLIMETERS_PER_METER: Decimal = dec!(1000);
/// Converts meters per second to kilometers per hour.
pub const KMH_PER_METER_PER_SEC: Decimal = dec!(3.6);
/// Converts seconds to milliseconds.
pub const MILLIS_PER_SECOND: Decimal = dec!(1000);
/// Converts seconds to microseconds.
pub const MICROS_PER_SECOND: Decimal = dec!(1000000);
/// Converts seconds to nanoseconds.
pub const NANOS_PER_SECOND: Decimal = dec!(1000000000);
/// Converts minutes to seconds.
pub const SECONDS_PER_MINUTE: Decimal = dec!(60);
/// Radians in one degree, rounded down so that 180° stays on the positive side of the seam.
pub const RADIANS_PER_DEGREE: Decimal = dec!(0.0174532925199432957692369076);
/// Degrees in one radian.
pub const DEGREES_PER_RADIAN: Decimal = dec!(57.295779513082320876798154814);
/// Half a turn in radians, to the full precision of [`Decimal`].
pub const PI: Decimal = dec!(3.1415926535897932384626433833);
/// A full turn in radians.
pub const TAU: Decimal = dec!(6.2831853071795864769252867666);

/// A scalar quantity stored in its canonical unit.
///
/// `Base` is the dimension being measured and `Dt` is the number of times it is
/// differentiated over time, so that e.g. [`Speed`] and [`Distance`] are distinct types
/// that cannot be mixed up.
///
/// The canonical value is only reachable through the named unit constructors and accessors
/// of each quantity, e.g. [`Distance::from_millimeters`] and [`Distance::into_meters`].
pub struct Quantity<Base, Dt>(pub(crate) Decimal, PhantomData<(Base, Dt)>);

impl<Base, Dt> Quantity<Base, Dt> {
    pub const ZERO: Self = Self::new(Decimal::ZERO);

    pub(crate) const fn new(value: Decimal) -> Self { Self(value, PhantomData) }

    #[must_use]
    pub fn is_positive(self) -> bool { !self.0.is_zero() && self.0.is_sign_positive() }

    #[must_use]
    pub fn is_negative(self) -> bool { !self.0.is_zero() && self.0.is_sign_negative() }

    #[must_use]
    pub fn is_zero(self) -> bool { self.0.is_zero() }

    /// Asserts that the quantity is within `epsilon` of `expect`.
    ///
    /// # Errors
    /// If the absolute difference between `self` and `expect` is greater than `epsilon`.
    pub fn assert_approx(
        self,
        expect: Self,
        epsilon: Self,
    ) -> Result<(), AssertApproxError<Self, Self>> {
        if (self.0 - expect.0).abs() > epsilon.0 {
            Err(AssertApproxError { actual: self, expect, epsilon })
        } else {
            Ok(())
        }
    }
}

/// Access to the canonical scalar for the generic algorithms of this crate.
///
/// Library-internal: both methods take a token that cannot be named outside this crate,
/// so the trait can be used as a bound but never called or implemented elsewhere.
/// [`Heading`] does not implement it since rebuilding a heading from a raw scalar wraps around.
pub trait BaseValue: Copy {
    /// Returns the canonical scalar.
    #[doc(hidden)]
    fn base_value(self, _: Internal) -> Decimal;

    /// Creates a value of the same type from a canonical scalar.
    #[doc(hidden)]
    fn from_base_value(value: Decimal, _: Internal) -> Self;
}

mod internal {
    #[derive(Clone, Copy)]
    pub struct Internal;
}
use internal::Internal;

pub(crate) fn base<T: BaseValue>(value: T) -> Decimal { value.base_value(Internal) }

pub(crate) fn from_base<T: BaseValue>(value: Decimal) -> T { T::from_base_value(value, Internal) }

impl<Base, Dt> BaseValue for Quantity<Base, Dt> {
    fn base_value(self, _: Internal) -> Decimal { self.0 }

    fn from_base_value(value: Decimal, _: Internal) -> Self { Self::new(value) }
}

/// The canonical unit of a quantity.
pub trait CanonicalUnit {
    /// Field name used when the quantity is serialized.
    const NAME: &'static str;
    /// Symbol used when the quantity is displayed.
    const SYMBOL: &'static str;
}

impl<Base, Dt> Default for Quantity<Base, Dt> {
    fn default() -> Self { Self::ZERO }
}

impl<Base, Dt> num_traits::Zero for Quantity<Base, Dt> {
    fn zero() -> Self { Self::ZERO }

    fn is_zero(&self) -> bool { self.0.is_zero() }
}

impl<Base, Dt> Clone for Quantity<Base, Dt> {
    fn clone(&self) -> Self { *self }
}

impl<Base, Dt> Copy for Quantity<Base, Dt> {}

impl<Base, Dt> PartialEq for Quantity<Base, Dt> {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<Base, Dt> Eq for Quantity<Base, Dt> {}

impl<Base, Dt> PartialOrd for Quantity<Base, Dt> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { Some(self.cmp(other)) }
}

impl<Base, Dt> Ord for Quantity<Base, Dt> {
    fn cmp(&self, other: &Self) -> cmp::Ordering { self.0.cmp(&other.0) }
}

impl<Base, Dt> hash::Hash for Quantity<Base, Dt> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { self.0.hash(state); }
}

impl<Base, Dt> ops::Add for Quantity<Base, Dt> {
    type Output = Self;

    fn add(self, other: Self) -> Self { Self::new(self.0 + other.0) }
}

impl<Base, Dt> ops::AddAssign for Quantity<Base, Dt> {
    fn add_assign(&mut self, other: Self) { self.0 += other.0; }
}

impl<Base, Dt> ops::Sub for Quantity<Base, Dt> {
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self::new(self.0 - other.0) }
}

impl<Base, Dt> ops::SubAssign for Quantity<Base, Dt> {
    fn sub_assign(&mut self, other: Self) { self.0 -= other.0; }
}

impl<Base, Dt> ops::Neg for Quantity<Base, Dt> {
    type Output = Self;

    fn neg(self) -> Self { Self::new(-self.0) }
}

impl<Base, Dt> ops::Mul<Decimal> for Quantity<Base, Dt> {
    type Output = Self;

    fn mul(self, other: Decimal) -> Self { Self::new(self.0 * other) }
}

impl<Base, Dt> ops::Mul<Quantity<Base, Dt>> for Decimal {
    type Output = Quantity<Base, Dt>;

    fn mul(self, other: Quantity<Base, Dt>) -> Quantity<Base, Dt> { Quantity::new(self * other.0) }
}

impl<Base, Dt> ops::MulAssign<Decimal> for Quantity<Base, Dt> {
    fn mul_assign(&mut self, other: Decimal) { self.0 *= other; }
}

impl<Base, Dt> ops::Div<Decimal> for Quantity<Base, Dt> {
    type Output = Self;

    fn div(self, other: Decimal) -> Self { Self::new(self.0 / other) }
}

impl<Base, Dt> ops::DivAssign<Decimal> for Quantity<Base, Dt> {
    fn div_assign(&mut self, other: Decimal) { self.0 /= other; }
}

/// Dimensionless ratio between two quantities of the same kind.
impl<Base, Dt> ops::Div for Quantity<Base, Dt> {
    type Output = Decimal;

    fn div(self, other: Self) -> Decimal { self.0 / other.0 }
}

impl<Base, Dt> iter::Sum for Quantity<Base, Dt> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |sum, value| sum + value)
    }
}

impl<Base, Dt> fmt::Display for Quantity<Base, Dt>
where
    Self: CanonicalUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_with_symbol(f, self.0, None, Self::SYMBOL)
    }
}

/// Writes `value [symbol]`, rounded to the precision requested by the formatter if any,
/// otherwise to `default_precision`.
pub(crate) fn write_with_symbol(
    f: &mut fmt::Formatter<'_>,
    value: Decimal,
    default_precision: Option<usize>,
    symbol: &str,
) -> fmt::Result {
    match f.precision().or(default_precision) {
        Some(precision) => {
            let rounded = value.round_dp(u32::try_from(precision).unwrap_or(u32::MAX));
            write!(f, "{rounded:.precision$} [{symbol}]")
        }
        None => write!(f, "{value} [{symbol}]"),
    }
}

/// Used as `Base` in `Quantity` for lengths.
pub struct LengthBase;
/// Used as `Base` in `Quantity` for durations.
pub struct TimeBase;
/// Used as `Base` in `Quantity` for linear (unbounded) angles.
pub struct AngleBase;

/// Used as `Dt` in `Quantity` to indicate that the unit is not a rate of change.
pub struct DtZero;
/// Used as `Dt` in `Quantity` to indicate that the unit is the rate of change of `Quantity<Dt=Dt>`.
pub struct Ddt<Dt>(Dt);

pub type DtOne = Ddt<DtZero>;
pub type DtTwo = Ddt<DtOne>;

/// A distance quantity. Internal representation is in meters.
pub type Distance = Quantity<LengthBase, DtZero>;

/// A linear speed (rate of [distance](Distance) change) quantity.
/// Internal representation is in m/s.
pub type Speed = Quantity<LengthBase, DtOne>;

/// A linear acceleration (rate of linear [speed](Speed) change) quantity.
/// Internal representation is in m/s^2.
pub type Acceleration = Quantity<LengthBase, DtTwo>;

/// A duration, which may be negative. Internal representation is in seconds.
pub type Time = Quantity<TimeBase, DtZero>;

/// A relative angle without wraparound. Internal representation is in radians.
pub type Angle = Quantity<AngleBase, DtZero>;

/// An angular speed (rate of [angle](Angle) or [heading](Heading) change) quantity.
/// Always in rad/s.
pub type HeadingSpeed = Quantity<AngleBase, DtOne>;

macro_rules! impl_canonical_unit {
    ($($ty:ident: $name:literal, $symbol:literal;)*) => {$(
        impl CanonicalUnit for $ty {
            const NAME: &'static str = $name;
            const SYMBOL: &'static str = $symbol;
        }
    )*};
}

impl_canonical_unit! {
    Distance: "meters", "m";
    Speed: "meters_per_second", "m/s";
    Acceleration: "meters_per_second_squared", "m/s^2";
    Time: "seconds", "s";
    Angle: "radians", "rad";
    HeadingSpeed: "radians_per_second", "rad/s";
}

/// Wires `$rate = $quantity / Time` in every direction.
macro_rules! impl_rate_of_change {
    ($($rate:ident = $quantity:ident / Time;)*) => {$(
        impl ops::Div<Time> for $quantity {
            type Output = $rate;

            fn div(self, time: Time) -> $rate { $rate::new(self.0 / time.0) }
        }

        impl ops::Mul<Time> for $rate {
            type Output = $quantity;

            fn mul(self, time: Time) -> $quantity { $quantity::new(self.0 * time.0) }
        }

        impl ops::Mul<$rate> for Time {
            type Output = $quantity;

            fn mul(self, rate: $rate) -> $quantity { $quantity::new(self.0 * rate.0) }
        }

        /// Time needed to cover the quantity at the given rate.
        impl ops::Div<$rate> for $quantity {
            type Output = Time;

            fn div(self, rate: $rate) -> Time { Time::new(self.0 / rate.0) }
        }
    )*};
}

impl_rate_of_change! {
    Speed = Distance / Time;
    Acceleration = Speed / Time;
    HeadingSpeed = Angle / Time;
}

/// Generates `from_<unit>`/`into_<unit>` pairs for units that are a fixed multiple of the
/// canonical unit. `$per_canonical` is the number of `<unit>` in one canonical unit.
macro_rules! decl_unit_conversions {
    ($(
        $ty:ident {
            $($unit:ident: $per_canonical:expr,)*
        }
    )*) => {
        paste::paste! {
            $(
                impl $ty {
                    $(
                        #[must_use]
                        pub fn [<from_ $unit>](value: impl Into<Decimal>) -> Self {
                            Self::new(value.into() / $per_canonical)
                        }

                        #[must_use]
                        pub fn [<into_ $unit>](self) -> Decimal { self.0 * $per_canonical }
                    )*
                }
            )*
        }
    };
}

decl_unit_conversions! {
    Distance {
        millimeters: MILLIMETERS_PER_METER,
    }
    Speed {
        millimeters_per_sec: MILLIMETERS_PER_METER,
        kmh: KMH_PER_METER_PER_SEC,
    }
    Acceleration {
        millimeters_per_sec2: MILLIMETERS_PER_METER,
    }
    Time {
        millis: MILLIS_PER_SECOND,
        micros: MICROS_PER_SECOND,
        nanos: NANOS_PER_SECOND,
    }
}

impl Distance {
    #[must_use]
    pub fn from_meters(meters: impl Into<Decimal>) -> Self { Self::new(meters.into()) }

    #[must_use]
    pub const fn into_meters(self) -> Decimal { self.0 }

    /// Returns the angle of the vector `(x, self)` from the x axis.
    #[must_use]
    pub fn atan2(self, x: Self) -> Angle { Angle::atan2(self.0, x.0) }
}

impl Speed {
    #[must_use]
    pub fn from_meters_per_sec(mps: impl Into<Decimal>) -> Self { Self::new(mps.into()) }

    #[must_use]
    pub const fn into_meters_per_sec(self) -> Decimal { self.0 }

    /// Limits the change from `previous` to what `max_accel` allows within `dt`.
    ///
    /// Only the magnitude of `max_accel` is used.
    #[must_use]
    pub fn limit_with_accel_and_time(
        self,
        previous: Speed,
        max_accel: Acceleration,
        dt: Time,
    ) -> Self {
        let max_change = max_accel.abs() * dt;
        self.clamp_with(previous - max_change, previous + max_change)
    }
}

impl Acceleration {
    #[must_use]
    pub fn from_meters_per_sec2(mps2: impl Into<Decimal>) -> Self { Self::new(mps2.into()) }

    #[must_use]
    pub const fn into_meters_per_sec2(self) -> Decimal { self.0 }
}

impl Time {
    #[must_use]
    pub fn from_secs(secs: impl Into<Decimal>) -> Self { Self::new(secs.into()) }

    #[must_use]
    pub const fn into_secs(self) -> Decimal { self.0 }

    #[must_use]
    pub fn from_minutes(minutes: impl Into<Decimal>) -> Self {
        Self::new(minutes.into() * SECONDS_PER_MINUTE)
    }

    #[must_use]
    pub fn into_minutes(self) -> Decimal { self.0 / SECONDS_PER_MINUTE }

    /// Time elapsed from `from` to `to`, negative if `to` is earlier.
    #[must_use]
    pub fn signed_between(from: Instant, to: Instant) -> Self {
        match to.checked_duration_since(from) {
            Some(elapsed) => Self::from(elapsed),
            None => -Self::from(from.duration_since(to)),
        }
    }

    /// Absolute time between two instants, regardless of their order.
    #[must_use]
    pub fn abs_between(a: Instant, b: Instant) -> Self { Self::signed_between(a, b).abs() }

    /// Converts into a [`Duration`], truncated to whole nanoseconds.
    ///
    /// Returns `None` if the time is negative or too large.
    #[must_use]
    pub fn try_into_duration(self) -> Option<Duration> {
        if self.is_negative() {
            return None;
        }
        let secs = self.0.trunc().to_u64()?;
        let nanos = (self.0.fract() * NANOS_PER_SECOND).trunc().to_u32()?;
        Some(Duration::new(secs, nanos))
    }
}

impl From<Duration> for Time {
    fn from(duration: Duration) -> Self {
        Self::new(
            Decimal::from(duration.as_secs()) + Decimal::new(i64::from(duration.subsec_nanos()), 9),
        )
    }
}

impl HeadingSpeed {
    #[must_use]
    pub fn from_radians_per_sec(radians: impl Into<Decimal>) -> Self { Self::new(radians.into()) }

    #[must_use]
    pub const fn into_radians_per_sec(self) -> Decimal { self.0 }

    #[must_use]
    pub fn from_degrees_per_sec(degrees: impl Into<Decimal>) -> Self {
        Self::new(angle::degrees_to_radians(degrees.into()))
    }

    #[must_use]
    pub fn into_degrees_per_sec(self) -> Decimal { angle::radians_to_degrees(self.0) }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Distance")
            .field("meters", &self.0)
            .field("millimeters", &self.into_millimeters())
            .finish()
    }
}

impl fmt::Debug for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speed").field("m/s", &self.0).field("km/h", &self.into_kmh()).finish()
    }
}

impl fmt::Debug for Acceleration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Acceleration").field("m/s2", &self.0).finish()
    }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Time").field("seconds", &self.0).finish()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle")
            .field("radians", &self.0)
            .field("degrees", &self.into_degrees())
            .finish()
    }
}

impl fmt::Debug for HeadingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadingSpeed").field("degrees/s", &self.into_degrees_per_sec()).finish()
    }
}

use rust_decimal::Decimal;

use crate::{Acceleration, Angle, BaseValue, Distance, HeadingSpeed, Speed, Time};

#[cfg(test)]
mod tests;

/// A named unit in which a quantity can be entered or displayed.
pub trait UnitEnum: Copy + Eq + strum::IntoEnumIterator {
    type Quantity: BaseValue;

    fn to_str(self) -> &'static str;

    fn decimal_to_quantity(self) -> fn(Decimal) -> Self::Quantity;
    fn quantity_to_decimal(self) -> fn(Self::Quantity) -> Decimal;

    /// Interprets `value` in this unit.
    fn to_quantity(self, value: Decimal) -> Self::Quantity { self.decimal_to_quantity()(value) }

    /// Expresses `quantity` in this unit.
    fn from_quantity(self, quantity: Self::Quantity) -> Decimal {
        self.quantity_to_decimal()(quantity)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Meters,
    Millimeters,
}

impl UnitEnum for LengthUnit {
    type Quantity = Distance;

    fn to_str(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Millimeters => "mm",
        }
    }

    #[inline]
    fn decimal_to_quantity(self) -> fn(Decimal) -> Distance {
        match self {
            Self::Meters => Distance::from_meters,
            Self::Millimeters => Distance::from_millimeters,
        }
    }

    #[inline]
    fn quantity_to_decimal(self) -> fn(Distance) -> Decimal {
        match self {
            Self::Meters => Distance::into_meters,
            Self::Millimeters => Distance::into_millimeters,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    MetersPerSecond,
    MillimetersPerSecond,
    KilometersPerHour,
}

impl UnitEnum for SpeedUnit {
    type Quantity = Speed;

    fn to_str(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::MillimetersPerSecond => "mm/s",
            Self::KilometersPerHour => "km/h",
        }
    }

    #[inline]
    fn decimal_to_quantity(self) -> fn(Decimal) -> Speed {
        match self {
            Self::MetersPerSecond => Speed::from_meters_per_sec,
            Self::MillimetersPerSecond => Speed::from_millimeters_per_sec,
            Self::KilometersPerHour => Speed::from_kmh,
        }
    }

    #[inline]
    fn quantity_to_decimal(self) -> fn(Speed) -> Decimal {
        match self {
            Self::MetersPerSecond => Speed::into_meters_per_sec,
            Self::MillimetersPerSecond => Speed::into_millimeters_per_sec,
            Self::KilometersPerHour => Speed::into_kmh,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AccelUnit {
    MetersPerSecond2,
    MillimetersPerSecond2,
}

impl UnitEnum for AccelUnit {
    type Quantity = Acceleration;

    fn to_str(self) -> &'static str {
        match self {
            Self::MetersPerSecond2 => "m/s^2",
            Self::MillimetersPerSecond2 => "mm/s^2",
        }
    }

    #[inline]
    fn decimal_to_quantity(self) -> fn(Decimal) -> Acceleration {
        match self {
            Self::MetersPerSecond2 => Acceleration::from_meters_per_sec2,
            Self::MillimetersPerSecond2 => Acceleration::from_millimeters_per_sec2,
        }
    }

    #[inline]
    fn quantity_to_decimal(self) -> fn(Acceleration) -> Decimal {
        match self {
            Self::MetersPerSecond2 => Acceleration::into_meters_per_sec2,
            Self::MillimetersPerSecond2 => Acceleration::into_millimeters_per_sec2,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minutes,
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl UnitEnum for TimeUnit {
    type Quantity = Time;

    fn to_str(self) -> &'static str {
        match self {
            Self::Minutes => "min",
            Self::Seconds => "s",
            Self::Millis => "ms",
            Self::Micros => "\u{b5}s",
            Self::Nanos => "ns",
        }
    }

    #[inline]
    fn decimal_to_quantity(self) -> fn(Decimal) -> Time {
        match self {
            Self::Minutes => Time::from_minutes,
            Self::Seconds => Time::from_secs,
            Self::Millis => Time::from_millis,
            Self::Micros => Time::from_micros,
            Self::Nanos => Time::from_nanos,
        }
    }

    #[inline]
    fn quantity_to_decimal(self) -> fn(Time) -> Decimal {
        match self {
            Self::Minutes => Time::into_minutes,
            Self::Seconds => Time::into_secs,
            Self::Millis => Time::into_millis,
            Self::Micros => Time::into_micros,
            Self::Nanos => Time::into_nanos,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl UnitEnum for AngleUnit {
    type Quantity = Angle;

    fn to_str(self) -> &'static str {
        match self {
            Self::Degrees => "\u{b0}",
            Self::Radians => "rad",
        }
    }

    #[inline]
    fn decimal_to_quantity(self) -> fn(Decimal) -> Angle {
        match self {
            Self::Degrees => Angle::from_degrees,
            Self::Radians => Angle::from_radians,
        }
    }

    #[inline]
    fn quantity_to_decimal(self) -> fn(Angle) -> Decimal {
        match self {
            Self::Degrees => Angle::into_degrees,
            Self::Radians => Angle::into_radians,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HeadingSpeedUnit {
    DegreesPerSecond,
    RadiansPerSecond,
}

impl UnitEnum for HeadingSpeedUnit {
    type Quantity = HeadingSpeed;

    fn to_str(self) -> &'static str {
        match self {
            Self::DegreesPerSecond => "\u{b0}/s",
            Self::RadiansPerSecond => "rad/s",
        }
    }

    #[inline]
    fn decimal_to_quantity(self) -> fn(Decimal) -> HeadingSpeed {
        match self {
            Self::DegreesPerSecond => HeadingSpeed::from_degrees_per_sec,
            Self::RadiansPerSecond => HeadingSpeed::from_radians_per_sec,
        }
    }

    #[inline]
    fn quantity_to_decimal(self) -> fn(HeadingSpeed) -> Decimal {
        match self {
            Self::DegreesPerSecond => HeadingSpeed::into_degrees_per_sec,
            Self::RadiansPerSecond => HeadingSpeed::into_radians_per_sec,
        }
    }
}

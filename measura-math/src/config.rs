use rust_decimal::Decimal;

use crate::units::{base, from_base};
use crate::{
    Angle, AngleUnit, BaseValueMath, Distance, LengthUnit, Speed, SpeedUnit, UnitEnum,
};


/// Describes a configurable quantity: its default, allowed range and preferred display unit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuantityMetadataWithUnit<T, U> {
    pub default:   T,
    pub unit:      U,
    pub min:       T,
    pub max:       T,
    /// Step that entered values are rounded to, if any.
    #[serde(default)]
    pub precision: Option<T>,
}

impl<T, U> QuantityMetadataWithUnit<T, U>
where
    T: BaseValueMath,
    U: UnitEnum<Quantity = T>,
{
    #[must_use]
    pub fn clamp(&self, value: T) -> T { value.clamp_with(self.min, self.max) }

    /// Rounds `value` to the nearest multiple of `precision`, then clamps it into range.
    #[must_use]
    pub fn quantize(&self, value: T) -> T {
        let value = match self.precision {
            Some(step) if !base(step).is_zero() => {
                let step = base(step);
                from_base((base(value) / step).round() * step)
            }
            _ => value,
        };
        self.clamp(value)
    }

    /// Interprets `value` in the display unit and quantizes it.
    #[must_use]
    pub fn from_display(&self, value: Decimal) -> T {
        let quantity = self.unit.to_quantity(value);
        if base(self.clamp(quantity)) != base(quantity) {
            tracing::warn!(%value, unit = self.unit.to_str(), "entered value is out of range");
        }
        self.quantize(quantity)
    }

    /// Formats `value` in the display unit.
    #[must_use]
    pub fn format(&self, value: T) -> String {
        format!("{} {}", self.unit.from_quantity(value).normalize(), self.unit.to_str())
    }
}

pub type DistanceMetadata = QuantityMetadataWithUnit<Distance, LengthUnit>;
impl Default for DistanceMetadata {
    fn default() -> Self {
        Self {
            default:   Distance::from_meters(1),
            unit:      LengthUnit::Meters,
            min:       Distance::ZERO,
            max:       Distance::from_meters(100),
            precision: None,
        }
    }
}

pub type SpeedMetadata = QuantityMetadataWithUnit<Speed, SpeedUnit>;
impl Default for SpeedMetadata {
    fn default() -> Self {
        Self {
            default:   Speed::from_kmh(50),
            unit:      SpeedUnit::KilometersPerHour,
            min:       Speed::ZERO,
            max:       Speed::from_kmh(300),
            precision: Some(Speed::from_kmh(1)),
        }
    }
}

pub type AngleMetadata = QuantityMetadataWithUnit<Angle, AngleUnit>;
impl Default for AngleMetadata {
    fn default() -> Self {
        Self {
            default:   Angle::ZERO,
            unit:      AngleUnit::Degrees,
            min:       Angle::ZERO,
            max:       Angle::RIGHT,
            precision: None,
        }
    }
}

//! Quantities are written as a single-field object keyed by the canonical unit name,
//! e.g. `{"meters": 0.5}`.

use std::fmt;
use std::marker::PhantomData;

use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{CanonicalUnit, Quantity};

/// The canonical scalar, written as an exact JSON number.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct Canonical(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl<Base, Dt> Serialize for Quantity<Base, Dt>
where
    Self: CanonicalUnit,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(Self::NAME, &Canonical(self.0))?;
        map.end()
    }
}

impl<'de, Base, Dt> Deserialize<'de> for Quantity<Base, Dt>
where
    Self: CanonicalUnit,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QuantityVisitor(PhantomData))
    }
}

struct QuantityVisitor<Base, Dt>(PhantomData<fn() -> Quantity<Base, Dt>>);

impl<'de, Base, Dt> Visitor<'de> for QuantityVisitor<Base, Dt>
where
    Quantity<Base, Dt>: CanonicalUnit,
{
    type Value = Quantity<Base, Dt>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with a single {:?} field", <Self::Value as CanonicalUnit>::NAME)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let name = <Self::Value as CanonicalUnit>::NAME;

        let mut value = None;
        while let Some(key) = map.next_key::<String>()? {
            if key != name {
                return Err(de::Error::custom(format_args!(
                    "unknown field {key:?}, expected {name:?}"
                )));
            }
            if value.is_some() {
                return Err(de::Error::duplicate_field(name));
            }
            let Canonical(decimal) = map.next_value()?;
            value = Some(decimal);
        }

        let value = value.ok_or_else(|| de::Error::missing_field(name))?;
        Ok(Quantity::new(value))
    }
}

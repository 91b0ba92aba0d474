use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use super::{
    AccelUnit, AngleUnit, HeadingSpeedUnit, LengthUnit, SpeedUnit, TimeUnit, UnitEnum,
};
use crate::{Distance, Speed, Time};

fn assert_round_trips<U: UnitEnum + std::fmt::Debug>() {
    for unit in U::iter() {
        let value = dec!(12.5);
        let actual = unit.from_quantity(unit.to_quantity(value));
        assert!((actual - value).abs() < dec!(0.000000001), "{unit:?}: {actual} != {value}");
        assert!(!unit.to_str().is_empty());
    }
}

#[test]
fn all_units_round_trip() {
    assert_round_trips::<LengthUnit>();
    assert_round_trips::<SpeedUnit>();
    assert_round_trips::<AccelUnit>();
    assert_round_trips::<TimeUnit>();
    assert_round_trips::<AngleUnit>();
    assert_round_trips::<HeadingSpeedUnit>();
}

#[test]
fn scaled_units() {
    assert_eq!(LengthUnit::Millimeters.to_quantity(dec!(410)), Distance::from_meters(dec!(0.41)));
    assert_eq!(SpeedUnit::KilometersPerHour.to_quantity(dec!(36)), Speed::from_meters_per_sec(10));
    assert_eq!(TimeUnit::Minutes.to_quantity(Decimal::TWO), Time::from_secs(120));
    assert_eq!(TimeUnit::Minutes.from_quantity(Time::from_secs(90)), dec!(1.5));
    assert_eq!(TimeUnit::Millis.from_quantity(Time::from_secs(dec!(0.25))), dec!(250));
}

#[test]
fn serde_names() {
    assert_eq!(
        serde_json::to_string(&SpeedUnit::KilometersPerHour).unwrap(),
        r#""kilometers_per_hour""#
    );
    let unit: AngleUnit = serde_json::from_str(r#""degrees""#).unwrap();
    assert_eq!(unit, AngleUnit::Degrees);
}

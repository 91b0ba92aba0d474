use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Acceleration, Angle, Distance, HeadingSpeed, Speed, Time};

#[test]
fn millimeters_are_exact() {
    assert_eq!(Distance::from_millimeters(410), Distance::from_meters(dec!(0.41)));
    assert_eq!(Distance::from_millimeters(963).into_meters(), dec!(0.963));
    assert_eq!(Distance::from_meters(dec!(1.2345)).into_millimeters(), dec!(1234.5));
}

#[test]
fn speed_units() {
    assert_eq!(Speed::from_kmh(dec!(3.6)), Speed::from_meters_per_sec(1));
    assert_eq!(Speed::from_meters_per_sec(10).into_kmh(), dec!(36));
    assert_eq!(Speed::from_millimeters_per_sec(250).into_meters_per_sec(), dec!(0.25));
}

#[test]
fn time_units() {
    assert_eq!(Time::from_millis(1500), Time::from_secs(dec!(1.5)));
    assert_eq!(Time::from_micros(20), Time::from_secs(dec!(0.00002)));
    assert_eq!(Time::from_nanos(7).into_secs(), dec!(0.000000007));
    assert_eq!(Time::from_secs(90).into_minutes(), dec!(1.5));
    assert_eq!(Time::from_minutes(2), Time::from_secs(120));
}

#[test]
fn heading_speed_units() {
    let speed = HeadingSpeed::from_degrees_per_sec(180);
    assert!((speed.into_radians_per_sec() - super::PI).abs() < dec!(0.0000000001));
    assert!((speed.into_degrees_per_sec() - dec!(180)).abs() < dec!(0.0000000001));
}

#[test]
fn linear_arithmetic() {
    let a = Distance::from_meters(3);
    let b = Distance::from_millimeters(500);
    assert_eq!(a + b, Distance::from_meters(dec!(3.5)));
    assert_eq!(a - b, Distance::from_meters(dec!(2.5)));
    assert_eq!(-a, Distance::from_meters(-3));
    assert_eq!(a * Decimal::TWO, Distance::from_meters(6));
    assert_eq!(Decimal::TWO * a, Distance::from_meters(6));
    assert_eq!(a / Decimal::TWO, Distance::from_meters(dec!(1.5)));
    assert_eq!(a / b, dec!(6));

    let mut c = a;
    c += b;
    c -= Distance::from_meters(1);
    c *= Decimal::TWO;
    c /= dec!(5);
    assert_eq!(c, Distance::from_meters(1));
}

#[test]
fn ordering_and_sign() {
    assert!(Distance::from_millimeters(999) < Distance::from_meters(1));
    assert!(Speed::from_kmh(-1).is_negative());
    assert!(Speed::from_kmh(1).is_positive());
    assert!(Speed::ZERO.is_zero());
    assert!(!Speed::ZERO.is_positive() && !Speed::ZERO.is_negative());
    assert_eq!(Time::default(), Time::ZERO);
}

#[test]
fn sum() {
    let total: Distance =
        [Distance::from_meters(1), Distance::from_millimeters(250)].into_iter().sum();
    assert_eq!(total, Distance::from_meters(dec!(1.25)));
    assert_eq!(std::iter::empty::<Time>().sum::<Time>(), Time::ZERO);
}

#[test]
fn speed_times_time() {
    assert_eq!(
        Speed::from_meters_per_sec(25) * Time::from_secs(4),
        Distance::from_meters(100)
    );
    assert_eq!(
        Time::from_secs(4) * Speed::from_meters_per_sec(25),
        Distance::from_meters(100)
    );
}

#[test]
fn distance_over_time() {
    assert_eq!(
        Distance::from_meters(dec!(120.8)) / Time::from_secs(4),
        Speed::from_meters_per_sec(dec!(30.2))
    );
}

#[test]
fn distance_over_speed() {
    assert_eq!(
        Distance::from_meters(dec!(120.8)) / Speed::from_meters_per_sec(4),
        Time::from_secs(dec!(30.2))
    );
}

#[test]
fn speed_and_acceleration() {
    let accel = Speed::from_meters_per_sec(10) / Time::from_secs(4);
    assert_eq!(accel, Acceleration::from_meters_per_sec2(dec!(2.5)));
    assert_eq!(accel * Time::from_secs(2), Speed::from_meters_per_sec(5));
    assert_eq!(Speed::from_meters_per_sec(5) / accel, Time::from_secs(2));
    assert_eq!(Acceleration::from_millimeters_per_sec2(2500), accel);
}

#[test]
fn angle_over_time() {
    let speed = Angle::from_radians(3) / Time::from_secs(2);
    assert_eq!(speed, HeadingSpeed::from_radians_per_sec(dec!(1.5)));
    assert_eq!(speed * Time::from_secs(2), Angle::from_radians(3));
}

#[test]
#[should_panic]
fn division_by_zero_traps() { let _ = Distance::from_meters(1) / Time::ZERO; }

macro_rules! limit_with_accel_tests {
    ($($name:ident: $value:expr, $previous:expr, $accel:expr, $dt:expr => $expect:expr;)*) => {
        paste::paste! {
            $(
                #[test]
                fn [<limit_with_accel_ $name>]() {
                    let actual = Speed::from_meters_per_sec($value).limit_with_accel_and_time(
                        Speed::from_meters_per_sec($previous),
                        Acceleration::from_meters_per_sec2($accel),
                        Time::from_secs($dt),
                    );
                    assert_eq!(actual, Speed::from_meters_per_sec($expect));
                }
            )*
        }
    };
}

limit_with_accel_tests! {
    speeding_up: 1, 0, dec!(0.5), 1 => dec!(0.5);
    slowing_down: 1, 10, dec!(0.5), 1 => dec!(9.5);
    negative_accel: 1, 10, dec!(-0.5), 1 => dec!(9.5);
    reversing: -10, 0, 2, 1 => -2;
    within_limit: 2, 1, 2, 1 => 2;
}

#[test]
fn duration_conversion() {
    let time = Time::from(Duration::new(3, 250_000_000));
    assert_eq!(time, Time::from_secs(dec!(3.25)));
    assert_eq!(time.try_into_duration(), Some(Duration::from_millis(3250)));
    assert_eq!(Time::from_nanos(1).try_into_duration(), Some(Duration::from_nanos(1)));
    assert_eq!(Time::from_secs(-1).try_into_duration(), None);
    assert_eq!(Time::from_millis(-1).try_into_duration(), None);
}

#[test]
fn instants() {
    let start = Instant::now();
    let end = start + Duration::from_millis(1500);
    assert_eq!(Time::signed_between(start, end), Time::from_secs(dec!(1.5)));
    assert_eq!(Time::signed_between(end, start), Time::from_secs(dec!(-1.5)));
    assert_eq!(Time::abs_between(end, start), Time::from_secs(dec!(1.5)));
}

#[test]
fn assert_approx() {
    let epsilon = Distance::from_millimeters(1);
    Distance::from_meters(1).assert_approx(Distance::from_millimeters(1001), epsilon).unwrap();
    let err = Distance::from_meters(1)
        .assert_approx(Distance::from_millimeters(1002), epsilon)
        .unwrap_err();
    assert_eq!(err.actual, Distance::from_meters(1));
    assert!(err.to_string().contains("expected"));
}

#[test]
fn display() {
    assert_eq!(format!("{:.2}", Distance::from_meters(dec!(0.5))), "0.50 [m]");
    assert_eq!(Speed::from_meters_per_sec(dec!(30.2)).to_string(), "30.2 [m/s]");
    assert_eq!(Time::from_secs(3).to_string(), "3 [s]");
    assert_eq!(Acceleration::from_meters_per_sec2(2).to_string(), "2 [m/s^2]");
}

#[test]
fn serialize_canonical_field() {
    assert_eq!(
        serde_json::to_string(&Distance::from_meters(dec!(0.5))).unwrap(),
        r#"{"meters":0.5}"#
    );
    assert_eq!(
        serde_json::to_string(&Speed::from_meters_per_sec(3)).unwrap(),
        r#"{"meters_per_second":3}"#
    );
    assert_eq!(serde_json::to_string(&Time::from_secs(dec!(1.25))).unwrap(), r#"{"seconds":1.25}"#);
    assert_eq!(
        serde_json::to_string(&Angle::from_radians(dec!(-0.75))).unwrap(),
        r#"{"radians":-0.75}"#
    );
    assert_eq!(
        serde_json::to_string(&HeadingSpeed::from_radians_per_sec(dec!(0.125))).unwrap(),
        r#"{"radians_per_second":0.125}"#
    );
}

#[test]
fn deserialize_exact() {
    let value: Distance =
        serde_json::from_str(r#"{"meters":0.1234567890123456789012345678}"#).unwrap();
    assert_eq!(value.into_meters(), dec!(0.1234567890123456789012345678));

    let value: Acceleration = serde_json::from_str(r#"{"meters_per_second_squared":-9.81}"#).unwrap();
    assert_eq!(value, Acceleration::from_meters_per_sec2(dec!(-9.81)));

    let value: Angle = serde_json::from_str(r#"{"radians":3.1415926535897932384626433833}"#).unwrap();
    assert_eq!(value, Angle::STRAIGHT);

    let value: HeadingSpeed = serde_json::from_str(r#"{"radians_per_second":-0.0625}"#).unwrap();
    assert_eq!(value, HeadingSpeed::from_radians_per_sec(dec!(-0.0625)));
}

#[test]
fn serde_round_trip_every_quantity() {
    fn round_trip<T>(value: T)
    where
        T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(serde_json::from_str::<T>(&json).unwrap(), value, "{json}");
    }

    round_trip(Distance::from_millimeters(dec!(963.25)));
    round_trip(Speed::from_kmh(dec!(123.4)));
    round_trip(Acceleration::from_millimeters_per_sec2(-17));
    round_trip(Time::from_nanos(123_456_789));
    round_trip(Angle::from_degrees(dec!(-271.5)));
    round_trip(HeadingSpeed::from_degrees_per_sec(dec!(3.3)));
}

#[test]
fn deserialize_rejects_other_units() {
    serde_json::from_str::<Distance>(r#"{"millimeters":500}"#).unwrap_err();
    serde_json::from_str::<Distance>(r#"{}"#).unwrap_err();
    serde_json::from_str::<Distance>(r#"{"meters":1,"meters":2}"#).unwrap_err();
    serde_json::from_str::<Speed>(r#"{"meters":1}"#).unwrap_err();
}

#[test]
fn debug_shows_projections() {
    let debug = format!("{:?}", Distance::from_meters(2));
    assert!(debug.contains("meters") && debug.contains("millimeters"), "{debug}");
}

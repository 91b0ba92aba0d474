use rust_decimal::Decimal;

mod units;
pub use units::*;

mod algebra;
pub use algebra::*;

mod ratio;
pub use ratio::{Product, Ratio};

mod config;
pub use config::*;


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    #[must_use]
    pub fn of(value: Decimal) -> Self {
        if value.is_zero() {
            Sign::Zero
        } else if value.is_sign_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> i8 {
        match sign {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

/// Returned when a value is not within the allowed tolerance of the expected value.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("expected {expect:?} (\u{b1}{epsilon:?}), got {actual:?}")]
pub struct AssertApproxError<T, D> {
    pub actual:  T,
    pub expect:  T,
    pub epsilon: D,
}

//! Algorithms shared by every linear quantity.

use rust_decimal::Decimal;

use crate::units::{base, from_base};
use crate::{BaseValue, Ratio, Sign};


/// Generic operations over any [`BaseValue`] type.
///
/// Implemented for every quantity; the result always has the same type as the receiver.
pub trait BaseValueMath: BaseValue {
    /// Clamps `self` between two boundaries given in any order.
    #[must_use]
    fn clamp_with(self, boundary_a: Self, boundary_b: Self) -> Self {
        let (a, b) = (base(boundary_a), base(boundary_b));
        from_base(base(self).clamp(a.min(b), a.max(b)))
    }

    /// Evaluates at `self` the line through `(x1, y1)` and `(x2, y2)`.
    ///
    /// Returns exactly `y1` at `x1` and `y2` at `x2`.
    ///
    /// # Panics
    /// If `x1 == x2`.
    #[must_use]
    fn extrapolate_linearly<Y: BaseValue>(self, x1: Self, y1: Y, x2: Self, y2: Y) -> Y {
        let dx = base(x2) - base(x1);
        if dx.is_zero() {
            tracing::error!(x = %base(x1), "cannot extrapolate over a zero-width interval");
        }

        let rate: Ratio<Y, Self> = Ratio::new(from_base(base(y2) - base(y1)), from_base(dx));
        let offset = rate * from_base::<Self>(base(self) - base(x1));
        from_base(base(y1) + base(offset))
    }

    /// Like [`extrapolate_linearly`](Self::extrapolate_linearly),
    /// but never leaves the range between `y1` and `y2`.
    ///
    /// # Panics
    /// If `x1 == x2`.
    #[must_use]
    fn extrapolate_and_clamp<Y: BaseValueMath>(self, x1: Self, y1: Y, x2: Self, y2: Y) -> Y {
        self.extrapolate_linearly(x1, y1, x2, y2).clamp_with(y1, y2)
    }

    #[must_use]
    fn abs(self) -> Self { from_base(base(self).abs()) }

    #[must_use]
    fn sign(self) -> Sign { Sign::of(base(self)) }

    /// Whether `self` and `other` differ by at most `max_delta`.
    #[must_use]
    fn is_close_to(self, other: Self, max_delta: Self) -> bool {
        (base(self) - base(other)).abs() <= base(max_delta)
    }

    #[must_use]
    fn is_not_close_to(self, other: Self, max_delta: Self) -> bool {
        !self.is_close_to(other, max_delta)
    }
}

impl<T: BaseValue> BaseValueMath for T {}

/// Returns the smallest of the values.
///
/// # Panics
/// If `values` is empty.
#[must_use]
pub fn min_val<T: BaseValue>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().min_by_key(|&value| base(value)).expect("min_val of no values")
}

/// Returns the largest of the values.
///
/// # Panics
/// If `values` is empty.
#[must_use]
pub fn max_val<T: BaseValue>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().max_by_key(|&value| base(value)).expect("max_val of no values")
}

/// Returns the arithmetic mean of the values.
///
/// # Panics
/// If `values` is empty.
#[must_use]
pub fn average_val<T: BaseValue>(values: impl IntoIterator<Item = T>) -> T {
    let (sum, count) = values
        .into_iter()
        .fold((Decimal::ZERO, 0_u64), |(sum, count), value| (sum + base(value), count + 1));
    assert!(count > 0, "average_val of no values");
    from_base(sum / Decimal::from(count))
}

/// Returns the sum of the values.
///
/// # Panics
/// If `values` is empty.
#[must_use]
pub fn sum_val<T: BaseValue>(values: impl IntoIterator<Item = T>) -> T {
    let mut values = values.into_iter();
    let first = values.next().expect("sum_val of no values");
    from_base(values.fold(base(first), |sum, value| sum + base(value)))
}

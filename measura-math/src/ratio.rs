use std::{fmt, ops};

use rust_decimal::Decimal;

use crate::units::{base, from_base};
use crate::{BaseValue, Quantity};


/// An amount of `A` per amount of `B`.
///
/// Both operands are stored as given; [`ratio_value`](Self::ratio_value) is derived on demand.
/// Multiplying by a `B` yields an `A`, and dividing an `A` by the ratio yields a `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Ratio<A, B> {
    numerator:   A,
    denominator: B,
}

impl<A: BaseValue, B: BaseValue> Ratio<A, B> {
    #[must_use]
    pub const fn new(numerator: A, denominator: B) -> Self { Self { numerator, denominator } }

    #[must_use]
    pub fn numerator(self) -> A { self.numerator }

    #[must_use]
    pub fn denominator(self) -> B { self.denominator }

    /// # Panics
    /// If the denominator is zero.
    #[must_use]
    pub fn ratio_value(self) -> Decimal { base(self.numerator) / base(self.denominator) }

    /// Swaps the roles of numerator and denominator.
    #[must_use]
    pub fn inverse(self) -> Ratio<B, A> {
        Ratio { numerator: self.denominator, denominator: self.numerator }
    }

    /// Returns the amount of `A` corresponding to `amount`.
    ///
    /// # Panics
    /// If the denominator is zero.
    #[must_use]
    pub fn apply(self, amount: B) -> A {
        from_base(scale(base(amount), base(self.numerator), base(self.denominator)))
    }

    /// Returns the amount of `B` corresponding to `amount`.
    ///
    /// # Panics
    /// If the numerator is zero.
    #[must_use]
    pub fn solve(self, amount: A) -> B {
        from_base(scale(base(amount), base(self.denominator), base(self.numerator)))
    }
}

/// Computes `value * numerator / denominator`.
///
/// Multiplies first so that scaling by `denominator / denominator` is exact,
/// and divides first only when the intermediate product would overflow.
fn scale(value: Decimal, numerator: Decimal, denominator: Decimal) -> Decimal {
    match value.checked_mul(numerator) {
        Some(product) => product / denominator,
        None => numerator / denominator * value,
    }
}

impl<A: BaseValue, B: BaseValue> ops::Mul<B> for Ratio<A, B> {
    type Output = A;

    fn mul(self, amount: B) -> A { self.apply(amount) }
}

impl<Base, Dt, A: BaseValue> ops::Mul<Ratio<A, Quantity<Base, Dt>>> for Quantity<Base, Dt> {
    type Output = A;

    fn mul(self, ratio: Ratio<A, Self>) -> A { ratio.apply(self) }
}

impl<Base, Dt, B: BaseValue> ops::Div<Ratio<Quantity<Base, Dt>, B>> for Quantity<Base, Dt> {
    type Output = B;

    fn div(self, ratio: Ratio<Self, B>) -> B { ratio.solve(self) }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Ratio<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

/// A pair of quantities whose product relates them.
///
/// Dividing the product by a new amount of one side yields the matching amount of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Product<A, B> {
    #[serde(rename = "numerator")]
    first:  A,
    #[serde(rename = "denominator")]
    second: B,
}

impl<A: BaseValue, B: BaseValue> Product<A, B> {
    #[must_use]
    pub const fn new(first: A, second: B) -> Self { Self { first, second } }

    #[must_use]
    pub fn first(self) -> A { self.first }

    #[must_use]
    pub fn second(self) -> B { self.second }

    #[must_use]
    pub fn product_value(self) -> Decimal { base(self.first) * base(self.second) }

    /// Returns the `B` whose product with `first` equals this product.
    ///
    /// # Panics
    /// If `first` is zero.
    #[must_use]
    pub fn div_by_first(self, first: A) -> B { from_base(self.product_value() / base(first)) }

    /// Returns the `A` whose product with `second` equals this product.
    ///
    /// # Panics
    /// If `second` is zero.
    #[must_use]
    pub fn div_by_second(self, second: B) -> A { from_base(self.product_value() / base(second)) }
}

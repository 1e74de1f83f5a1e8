use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Sub};

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Money type with 8 decimal places of internal precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const PRECISION: u32 = 8;

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(Self::PRECISION))
    }

    /// create from integer amount (euros)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (cents); scale is at most 28
    pub fn from_minor(amount: i64, scale: u32) -> Result<Self, rust_decimal::Error> {
        Decimal::try_new(amount, scale).map(Money::from_decimal)
    }

    /// create from a float; None for NaN, infinity or values beyond the decimal range
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_f64(value).map(Money::from_decimal)
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// share of this amount at the given rate (e.g. 1.5% of 465000)
    pub fn portion(&self, rate: Rate) -> Self {
        Money::from_decimal(self.0 * rate.as_decimal())
    }

    /// format with a fixed number of decimal places, padding zeros
    pub fn to_fixed(&self, dp: u32) -> String {
        fixed(self.0, dp)
    }
}

/// round half away from zero and pad to exactly `dp` places
fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dp);
    rounded.to_string()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_decimal(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_decimal(self.0 - other.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money::from_decimal(self.0 * other)
    }
}

/// an amount due every month, held as its yearly total
///
/// Twelfths of a decimal rarely terminate, so the division by 12 only
/// happens when the value is read out. Sums and comparisons work on
/// the yearly total and stay exact.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyAmount(Money);

impl MonthlyAmount {
    pub const ZERO: MonthlyAmount = MonthlyAmount(Money::ZERO);

    pub fn from_annual(annual: Money) -> Self {
        MonthlyAmount(annual)
    }

    /// twelve months' worth
    pub fn annual(&self) -> Money {
        self.0
    }

    /// the monthly amount at money precision
    pub fn as_money(&self) -> Money {
        Money::from_decimal(self.0.as_decimal() / MONTHS_PER_YEAR)
    }

    pub fn to_fixed(&self, dp: u32) -> String {
        fixed(self.0.as_decimal() / MONTHS_PER_YEAR, dp)
    }
}

impl Add for MonthlyAmount {
    type Output = MonthlyAmount;

    fn add(self, other: MonthlyAmount) -> MonthlyAmount {
        MonthlyAmount(self.0 + other.0)
    }
}

/// exact: true only when twelve of `other` make up the yearly total
impl PartialEq<Money> for MonthlyAmount {
    fn eq(&self, other: &Money) -> bool {
        other
            .as_decimal()
            .checked_mul(MONTHS_PER_YEAR)
            .is_some_and(|annual| annual == self.0.as_decimal())
    }
}

impl fmt::Debug for MonthlyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthlyAmount({} / 12)", self.0)
    }
}

impl fmt::Display for MonthlyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_money())
    }
}

impl Serialize for MonthlyAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_money().serialize(serializer)
    }
}

/// rate type for annual interest and amortization rates, stored as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from percentage (e.g., 3.9 for 3.9%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// create from percentage given as float; None for NaN, infinity or values beyond the decimal range
    pub fn from_percentage_f64(p: f64) -> Option<Self> {
        if !p.is_finite() {
            return None;
        }
        Decimal::from_f64(p).map(Rate::from_percentage)
    }

    /// create from basis points (e.g., 150 for 1.5%)
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::from(bps) / Decimal::from(10000))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

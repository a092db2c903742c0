//! Prices held as integer minor units.
//!
//! Cart totals such as `9.99 * 2 + 4.50` must come out exact, so nothing here
//! adds floats. Decimals only appear at the edges: parsing price attributes and
//! the persisted cart snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Currencies a storefront can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    INR,
}

impl Currency {
    const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::INR,
    ];

    /// `(ISO code, symbol, digits after the decimal point)`
    const fn table(self) -> (&'static str, char, u32) {
        match self {
            Currency::USD => ("USD", '$', 2),
            Currency::EUR => ("EUR", '\u{20ac}', 2),
            Currency::GBP => ("GBP", '\u{00a3}', 2),
            Currency::JPY => ("JPY", '\u{00a5}', 0),
            Currency::INR => ("INR", '\u{20b9}', 2),
        }
    }

    pub fn code(self) -> &'static str {
        self.table().0
    }

    pub fn symbol(self) -> char {
        self.table().1
    }

    /// Digits after the decimal point. Zero for yen.
    pub fn minor_digits(self) -> u32 {
        self.table().2
    }

    fn minor_per_major(self) -> i64 {
        10_i64.pow(self.minor_digits())
    }

    /// Case-insensitive lookup by ISO code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Whether `c` is one of the currency symbols shown in page copy.
    pub fn is_symbol_char(c: char) -> bool {
        Self::ALL.into_iter().any(|currency| currency.symbol() == c)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount in minor units (cents for USD) tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Round a decimal amount to the nearest minor unit.
    ///
    /// Non-finite input saturates. Input from the page goes through
    /// [`Money::try_from_decimal`] instead.
    ///
    /// ```
    /// use shopfront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let scaled = (amount * currency.minor_per_major() as f64).round();
        Self::new(scaled as i64, currency)
    }

    /// Like [`Money::from_decimal`] but rejects NaN, infinities, negatives and
    /// amounts too large for `i64` minor units.
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Result<Self, CommerceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        let scaled = (amount * currency.minor_per_major() as f64).round();
        if scaled >= i64::MAX as f64 {
            return Err(CommerceError::Overflow);
        }
        Ok(Self::new(scaled as i64, currency))
    }

    /// Parse price attribute text such as `"9.99"`.
    pub fn parse(text: &str, currency: Currency) -> Result<Self, CommerceError> {
        match text.trim().parse::<f64>() {
            Ok(amount) => Self::try_from_decimal(amount, currency),
            Err(_) => Err(CommerceError::InvalidPrice(text.to_string())),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// The amount in major units, as stored in cart snapshots.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// `"$49.99"`
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        match amount.strip_prefix('-') {
            Some(digits) => format!("-{}{}", self.currency.symbol(), digits),
            None => format!("{}{}", self.currency.symbol(), amount),
        }
    }

    /// `"49.99"`, always with the currency's full number of decimals.
    pub fn display_amount(&self) -> String {
        let digits = self.currency.minor_digits() as usize;
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let magnitude = self.amount_cents.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };

        let major = magnitude / per_major;
        if digits == 0 {
            format!("{sign}{major}")
        } else {
            let minor = magnitude % per_major;
            format!("{sign}{major}.{minor:0digits$}")
        }
    }

    /// `None` when the currencies differ or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let cents = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(cents, self.currency))
    }

    /// Total of `amounts`, starting from zero in `currency`.
    pub fn try_sum<'a>(
        amounts: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        amounts.fold(Some(Money::zero(currency)), |total, amount| {
            total.and_then(|total| total.try_add(amount))
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_decimal_rounds_to_minor_units() {
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount_cents, 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2, Currency::USD).amount_cents, 30);
        assert_eq!(Money::from_decimal(100.0, Currency::JPY).amount_cents, 100);
        assert_eq!(usd(1250).to_decimal(), 12.5);
    }

    #[test]
    fn test_try_from_decimal_rejects_bad_prices() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.01] {
            assert!(matches!(
                Money::try_from_decimal(bad, Currency::USD),
                Err(CommerceError::InvalidPrice(_))
            ));
        }
        assert!(matches!(
            Money::try_from_decimal(1e300, Currency::USD),
            Err(CommerceError::Overflow)
        ));
        assert_eq!(Money::try_from_decimal(0.0, Currency::USD).unwrap(), usd(0));
    }

    #[test]
    fn test_parse_attribute_text() {
        assert_eq!(Money::parse(" 4.50 ", Currency::USD).unwrap(), usd(450));
        assert!(matches!(
            Money::parse("free", Currency::USD),
            Err(CommerceError::InvalidPrice(text)) if text == "free"
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(4999).display(), "$49.99");
        assert_eq!(usd(5).display(), "$0.05");
        assert_eq!(usd(-250).display(), "-$2.50");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(-250, Currency::EUR).display_amount(), "-2.50");
        assert_eq!(usd(2448).to_string(), "$24.48");
    }

    #[test]
    fn test_checked_arithmetic() {
        let total = usd(999).try_multiply(2).and_then(|t| t.try_add(&usd(450)));
        assert_eq!(total, Some(usd(2448)));
        assert!(usd(1).try_add(&Money::new(1, Currency::EUR)).is_none());
        assert!(usd(i64::MAX).try_multiply(2).is_none());

        let lines = [usd(100), usd(250)];
        assert_eq!(Money::try_sum(lines.iter(), Currency::USD), Some(usd(350)));
        assert_eq!(Money::try_sum([].iter(), Currency::USD), Some(usd(0)));
        assert!(Money::try_sum([usd(i64::MAX), usd(1)].iter(), Currency::USD).is_none());
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("BTC"), None);
        assert!(Currency::is_symbol_char('\u{00a3}'));
        assert!(!Currency::is_symbol_char('#'));
        assert_eq!(Currency::JPY.minor_digits(), 0);
    }
}

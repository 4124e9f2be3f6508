//! Locale-dependent presentation, isolated from the numeric core.
//!
//! The pricing and schedule logic work on raw [`Decimal`] and [`NaiveDate`]
//! values; everything locale-shaped (currency symbols, separators, date
//! labels) lives behind the two small traits here so the core stays
//! independently testable.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Renders a monetary amount as a display string.
pub trait CurrencyFormatter {
    fn format(&self, amount: Decimal) -> String;
}

/// Currency display convention: symbol plus digit-grouping separators.
///
/// The default is the `$1,234.56` convention; construct with other separators
/// for locales that group with periods and use a decimal comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrency {
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl LocaleCurrency {
    pub fn new(
        symbol: impl Into<String>,
        thousands_separator: char,
        decimal_separator: char,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            thousands_separator,
            decimal_separator,
        }
    }
}

impl Default for LocaleCurrency {
    fn default() -> Self {
        Self::new("$", ',', '.')
    }
}

impl CurrencyFormatter for LocaleCurrency {
    /// Formats with a fixed two decimal places, rounding half-up first.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use order_core::format::{CurrencyFormatter, LocaleCurrency};
    ///
    /// let usd = LocaleCurrency::default();
    /// assert_eq!(usd.format(dec!(21000.00)), "$21,000.00");
    /// ```
    fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let mut value = round_half_up(amount);
        let negative = value.is_sign_negative() && !value.is_zero();
        value.set_sign_positive(true);
        value.rescale(2);

        let digits = value.to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        let sign = if negative { "-" } else { "" };
        format!(
            "{sign}{}{grouped}{}{frac_part}",
            self.symbol, self.decimal_separator
        )
    }
}

/// Renders a pickup date as the short label shown to the user.
pub trait DateLabeler {
    fn label(&self, date: NaiveDate) -> String;
}

/// Weekday, abbreviated month, and unpadded day: "Wed Aug 6".
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortDateLabel;

impl DateLabeler for ShortDateLabel {
    fn label(
        &self,
        date: NaiveDate,
    ) -> String {
        date.format("%a %b %-d").to_string()
    }
}

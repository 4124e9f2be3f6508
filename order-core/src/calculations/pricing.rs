//! Order price calculation.
//!
//! The price of an order is linear in the quantity, with one twist: picking
//! the order up on the same day it is placed carries a fixed surcharge.
//!
//! # Structure
//!
//! | Component | Description |
//! |-----------|-------------|
//! | base      | quantity × unit price |
//! | surcharge | fixed same-day-pickup charge, or zero |
//! | total     | base + surcharge |
//!
//! There is no tax, no discount tier, and no currency conversion. All amounts
//! are rounded half-up to two decimal places.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use order_core::calculations::{Pricing, PricingConfig};
//!
//! let config = PricingConfig {
//!     unit_price: dec!(5000.00),
//!     same_day_surcharge: dec!(6000.00),
//! };
//!
//! let pricing = Pricing::new(config).unwrap();
//!
//! let quote = pricing.quote(3, true);
//! assert_eq!(quote.total, dec!(21000.00));
//!
//! let quote = pricing.quote(3, false);
//! assert_eq!(quote.total, dec!(15000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Errors that can occur when validating a pricing configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The per-item price must be non-negative.
    #[error("unit price must be non-negative, got {0}")]
    InvalidUnitPrice(Decimal),

    /// The same-day pickup surcharge must be non-negative.
    #[error("same-day surcharge must be non-negative, got {0}")]
    InvalidSurcharge(Decimal),
}

/// Configuration values for order pricing.
///
/// These are plain data, supplied by the application that owns the order
/// screen; nothing here is read from module-level state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price of a single item.
    pub unit_price: Decimal,

    /// Fixed charge added when the pickup date is today.
    pub same_day_surcharge: Decimal,
}

impl PricingConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if either amount is negative.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.unit_price < Decimal::ZERO {
            return Err(PricingError::InvalidUnitPrice(self.unit_price));
        }
        if self.same_day_surcharge < Decimal::ZERO {
            return Err(PricingError::InvalidSurcharge(self.same_day_surcharge));
        }
        Ok(())
    }
}

/// Result of a price calculation, with the intermediate components exposed
/// for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Quantity × unit price.
    pub base: Decimal,

    /// Same-day surcharge, zero when pickup is on a later day.
    pub surcharge: Decimal,

    /// Final amount: base + surcharge.
    pub total: Decimal,
}

/// Calculator for order prices.
///
/// The configuration is validated once at construction, so [`Pricing::quote`]
/// itself cannot fail — the order screen recomputes the price on every
/// mutation and must not surface errors from that path.
#[derive(Debug, Clone)]
pub struct Pricing {
    config: PricingConfig,
}

impl Pricing {
    /// Creates a new price calculator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if the configuration is invalid.
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this calculator was built with.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Calculates the price for `quantity` items.
    ///
    /// When `same_day_pickup` is true the fixed surcharge is added on top of
    /// the base amount. Note that the surcharge applies even at quantity zero,
    /// matching the reference behavior of the order screen.
    pub fn quote(
        &self,
        quantity: u32,
        same_day_pickup: bool,
    ) -> PriceQuote {
        let base = round_half_up(Decimal::from(quantity) * self.config.unit_price);

        let surcharge = if same_day_pickup {
            round_half_up(self.config.same_day_surcharge)
        } else {
            Decimal::ZERO
        };

        PriceQuote {
            base,
            surcharge,
            total: round_half_up(base + surcharge),
        }
    }
}

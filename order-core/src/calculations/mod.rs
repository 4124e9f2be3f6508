//! Price calculation for the order screen.
//!
//! The derived price is the only computation the order state performs; it is
//! kept separate from the state holder so it can be tested with raw numeric
//! values.

pub mod common;
pub mod pricing;

pub use pricing::{PriceQuote, Pricing, PricingConfig, PricingError};

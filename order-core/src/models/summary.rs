use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a completed order screen, handed to whatever surface confirms
/// or shares the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub quantity: u32,
    pub flavor: String,
    pub pickup_date: String,
    pub total: Decimal,
}

pub mod calculations;
pub mod events;
pub mod format;
pub mod models;
pub mod state;

pub use calculations::{PriceQuote, Pricing, PricingConfig, PricingError};
pub use events::{OrderEvent, OrderObserver};
pub use format::{CurrencyFormatter, DateLabeler, LocaleCurrency, ShortDateLabel};
pub use models::{OrderSummary, PICKUP_WINDOW_DAYS, PickupOption, PickupSchedule};
pub use state::OrderState;

mod pickup;
mod summary;

pub use pickup::{PICKUP_WINDOW_DAYS, PickupOption, PickupSchedule};
pub use summary::OrderSummary;

//! The order screen's state holder.
//!
//! One [`OrderState`] lives for the duration of an order-entry screen. It
//! owns the four observable fields (quantity, flavor, pickup date, derived
//! price) and the fixed pickup-date window, recomputes the price eagerly on
//! every quantity or date change, and notifies subscribed observers after
//! each mutation.

use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::{Pricing, PricingConfig, PricingError};
use crate::events::{OrderEvent, OrderObserver};
use crate::format::{CurrencyFormatter, LocaleCurrency, ShortDateLabel};
use crate::models::{OrderSummary, PickupSchedule};

/// Mutable state of one order-entry screen.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use order_core::{OrderState, PricingConfig};
///
/// let config = PricingConfig {
///     unit_price: dec!(5000.00),
///     same_day_surcharge: dec!(6000.00),
/// };
/// let mut order = OrderState::new(config).unwrap();
///
/// order.set_quantity(3);
/// // The default pickup date is today, so the surcharge applies.
/// assert_eq!(order.price(), dec!(21000.00));
/// ```
pub struct OrderState {
    quantity: u32,
    flavor: String,
    date: String,
    price: Decimal,
    schedule: PickupSchedule,
    pricing: Pricing,
    currency: Box<dyn CurrencyFormatter>,
    observers: Vec<Rc<dyn OrderObserver>>,
}

impl OrderState {
    /// Creates a state holder with a pickup window starting today and the
    /// default currency convention.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if the pricing configuration is invalid.
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        Self::with_schedule(
            config,
            PickupSchedule::from_today(&ShortDateLabel),
            Box::new(LocaleCurrency::default()),
        )
    }

    /// Creates a state holder from explicit parts. The schedule and currency
    /// convention are fixed for the lifetime of the screen.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] if the pricing configuration is invalid.
    pub fn with_schedule(
        config: PricingConfig,
        schedule: PickupSchedule,
        currency: Box<dyn CurrencyFormatter>,
    ) -> Result<Self, PricingError> {
        let pricing = Pricing::new(config)?;
        Ok(Self {
            quantity: 0,
            flavor: String::new(),
            date: schedule.first_label().to_owned(),
            price: Decimal::ZERO,
            schedule,
            pricing,
            currency,
            observers: Vec::new(),
        })
    }

    /// Registers an observer; it is invoked synchronously after every
    /// subsequent mutation, in subscription order.
    pub fn subscribe(
        &mut self,
        observer: Rc<dyn OrderObserver>,
    ) {
        self.observers.push(observer);
    }

    /// Stores the item count and recomputes the price.
    pub fn set_quantity(
        &mut self,
        quantity: u32,
    ) {
        self.quantity = quantity;
        debug!(quantity, "order quantity updated");
        self.emit(OrderEvent::QuantityChanged { quantity });
        self.update_price();
    }

    /// Stores the flavor verbatim, including the empty string. The price is
    /// not affected.
    pub fn set_flavor(
        &mut self,
        flavor: impl Into<String>,
    ) {
        let flavor = flavor.into();
        self.flavor = flavor.clone();
        debug!(flavor = %self.flavor, "order flavor updated");
        self.emit(OrderEvent::FlavorChanged { flavor });
    }

    /// Stores the pickup date label and recomputes the price.
    ///
    /// Labels outside the offered window are accepted and stored verbatim
    /// (they price without the surcharge), but logged, since a consumer is
    /// expected to pass one of [`OrderState::date_options`].
    pub fn set_date(
        &mut self,
        label: impl Into<String>,
    ) {
        let label = label.into();
        if !self.schedule.contains_label(&label) {
            warn!(label = %label, "pickup date is not one of the offered options");
        }
        self.date = label.clone();
        debug!(label = %self.date, "pickup date updated");
        self.emit(OrderEvent::DateChanged { label });
        self.update_price();
    }

    /// True while no flavor has been chosen.
    pub fn has_no_flavor_set(&self) -> bool {
        self.flavor.is_empty()
    }

    /// Restores every field to its default: quantity 0, no flavor, same-day
    /// pickup, price 0.00. The pickup window is kept.
    pub fn reset_order(&mut self) {
        self.quantity = 0;
        self.flavor.clear();
        self.date = self.schedule.first_label().to_owned();
        // The reference screen stores a flat zero here instead of recomputing,
        // so no surcharge shows until the next quantity or date change.
        self.price = Decimal::ZERO;
        debug!("order reset to defaults");
        self.emit(OrderEvent::OrderReset);
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    /// The selected pickup date label.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The raw derived price. Never settable by callers.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// The derived price rendered with the screen's currency convention.
    pub fn formatted_price(&self) -> String {
        self.currency.format(self.price)
    }

    /// The offered pickup date labels, index 0 meaning same-day pickup.
    pub fn date_options(&self) -> Vec<String> {
        self.schedule.labels().map(str::to_owned).collect()
    }

    pub fn schedule(&self) -> &PickupSchedule {
        &self.schedule
    }

    /// Snapshot of the current fields for a summary surface.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            quantity: self.quantity,
            flavor: self.flavor.clone(),
            pickup_date: self.date.clone(),
            total: self.price,
        }
    }

    fn update_price(&mut self) {
        let same_day = self.date == self.schedule.first_label();
        let quote = self.pricing.quote(self.quantity, same_day);
        self.price = quote.total;
        self.emit(OrderEvent::PriceChanged { price: self.price });
    }

    fn emit(
        &self,
        event: OrderEvent,
    ) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }
}

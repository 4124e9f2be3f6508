//! Change notifications for the order screen.
//!
//! The state holder has exactly one writer and delivers events synchronously
//! within the mutating call, so observers see changes in mutation order with
//! no coordination needed.

use rust_decimal::Decimal;

/// Event emitted by [`OrderState`](crate::state::OrderState) after a mutation.
///
/// Quantity and date changes are each followed by a `PriceChanged` event
/// carrying the recomputed amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    QuantityChanged { quantity: u32 },
    FlavorChanged { flavor: String },
    DateChanged { label: String },
    PriceChanged { price: Decimal },
    OrderReset,
}

/// Observer hook for order state changes.
///
/// Any `Fn(&OrderEvent)` closure implements this directly:
///
/// ```
/// use std::rc::Rc;
/// use order_core::events::{OrderEvent, OrderObserver};
///
/// let observer: Rc<dyn OrderObserver> = Rc::new(|event: &OrderEvent| {
///     println!("{event:?}");
/// });
/// observer.on_event(&OrderEvent::OrderReset);
/// ```
pub trait OrderObserver {
    fn on_event(&self, event: &OrderEvent);
}

impl<F> OrderObserver for F
where
    F: Fn(&OrderEvent),
{
    fn on_event(
        &self,
        event: &OrderEvent,
    ) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn closures_observe_through_the_blanket_impl() {
        let seen = Cell::new(0u32);
        let observer = |_event: &OrderEvent| seen.set(seen.get() + 1);

        observer.on_event(&OrderEvent::OrderReset);
        observer.on_event(&OrderEvent::QuantityChanged { quantity: 2 });

        assert_eq!(seen.get(), 2);
    }
}

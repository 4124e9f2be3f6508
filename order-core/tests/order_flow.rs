//! Walks the whole order-entry flow through the public API, the way a screen
//! layer would drive it.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use order_core::{
    LocaleCurrency, OrderEvent, OrderState, PickupSchedule, PricingConfig, ShortDateLabel,
};

fn order_screen() -> OrderState {
    let config = PricingConfig {
        unit_price: dec!(5000.00),
        same_day_surcharge: dec!(6000.00),
    };
    let start = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let schedule = PickupSchedule::starting_on(start, &ShortDateLabel);
    OrderState::with_schedule(config, schedule, Box::new(LocaleCurrency::default())).unwrap()
}

#[test]
fn a_full_order_round_trip() {
    let mut order = order_screen();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    order.subscribe(Rc::new(move |event: &OrderEvent| {
        sink.borrow_mut().push(event.clone());
    }));

    // Fresh screen: defaults, same-day pickup preselected, nothing priced.
    assert_eq!(order.quantity(), 0);
    assert!(order.has_no_flavor_set());
    assert_eq!(order.date(), "Thu Aug 6");
    assert_eq!(order.formatted_price(), "$0.00");
    assert_eq!(order.date_options().len(), 7);

    // The user picks three items; same-day pickup carries the surcharge.
    order.set_quantity(3);
    assert_eq!(order.price(), dec!(21000.00));
    assert_eq!(order.formatted_price(), "$21,000.00");

    // A flavor is chosen; the price is untouched.
    order.set_flavor("Chocolate");
    assert!(!order.has_no_flavor_set());
    assert_eq!(order.price(), dec!(21000.00));

    // Pickup moved two days out; the surcharge disappears.
    let third_option = order.date_options()[2].clone();
    order.set_date(third_option.clone());
    assert_eq!(order.date(), "Sat Aug 8");
    assert_eq!(order.price(), dec!(15000.00));

    // The snapshot handed to the summary surface matches the screen.
    let summary = order.summary();
    assert_eq!(summary.quantity, 3);
    assert_eq!(summary.flavor, "Chocolate");
    assert_eq!(summary.pickup_date, third_option);
    assert_eq!(summary.total, dec!(15000.00));

    // Every mutation was announced, in order.
    assert_eq!(
        *events.borrow(),
        vec![
            OrderEvent::QuantityChanged { quantity: 3 },
            OrderEvent::PriceChanged {
                price: dec!(21000.00)
            },
            OrderEvent::FlavorChanged {
                flavor: "Chocolate".to_owned()
            },
            OrderEvent::DateChanged {
                label: third_option
            },
            OrderEvent::PriceChanged {
                price: dec!(15000.00)
            },
        ]
    );

    // Starting over restores every default but keeps the window.
    order.reset_order();
    assert_eq!(order.quantity(), 0);
    assert!(order.has_no_flavor_set());
    assert_eq!(order.date(), "Thu Aug 6");
    assert_eq!(order.formatted_price(), "$0.00");
    assert_eq!(order.date_options().len(), 7);
    assert_eq!(events.borrow().last(), Some(&OrderEvent::OrderReset));
}

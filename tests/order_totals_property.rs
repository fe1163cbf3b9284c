//! Property-based tests for money arithmetic in orders and donations.
//!
//! Totals are computed server-side from catalog snapshots, so these
//! invariants hold for any input the handlers can produce.

use proptest::prelude::*;

use flashsale::domain::donations::{Donation, DonationStatus};
use flashsale::domain::foundation::{DonationId, OrderId, ProductId};
use flashsale::domain::orders::{Order, OrderItem, OrderStatus};

/// Strategy for a plausible order line: non-negative price, quantity >= 1.
fn line_strategy() -> impl Strategy<Value = (i64, u32)> {
    (0i64..=1_000_000, 1u32..=50)
}

proptest! {
    /// The order total always equals the sum of its line totals.
    #[test]
    fn total_is_sum_of_line_totals(lines in prop::collection::vec(line_strategy(), 1..10)) {
        let items: Vec<OrderItem> = lines
            .iter()
            .map(|(price, qty)| {
                OrderItem::new(ProductId::new(), "Sample", *price, *qty).unwrap()
            })
            .collect();

        let expected: i64 = lines
            .iter()
            .map(|(price, qty)| price * i64::from(*qty))
            .sum();

        let order = Order::create(OrderId::new(), items).unwrap();

        prop_assert_eq!(order.total_cents, expected);
        prop_assert_eq!(order.status, OrderStatus::Pending);
    }

    /// A line total is exactly unit price times quantity.
    #[test]
    fn line_total_is_price_times_quantity((price, qty) in line_strategy()) {
        let item = OrderItem::new(ProductId::new(), "Sample", price, qty).unwrap();
        prop_assert_eq!(item.line_total_cents(), price * i64::from(qty));
    }

    /// Zero quantity is rejected no matter the price.
    #[test]
    fn zero_quantity_is_always_rejected(price in 0i64..=1_000_000) {
        prop_assert!(OrderItem::new(ProductId::new(), "Sample", price, 0).is_err());
    }

    /// Negative unit prices are rejected no matter the quantity.
    #[test]
    fn negative_price_is_always_rejected(price in -1_000_000i64..=-1, qty in 1u32..=50) {
        prop_assert!(OrderItem::new(ProductId::new(), "Sample", price, qty).is_err());
    }

    /// Any positive amount makes a pending donation.
    #[test]
    fn positive_donation_amounts_are_accepted(amount in 1i64..=100_000_000) {
        let donation = Donation::create(DonationId::new(), amount, None, None, None).unwrap();
        prop_assert_eq!(donation.amount_cents, amount);
        prop_assert_eq!(donation.status, DonationStatus::Pending);
    }

    /// Zero and negative amounts are always rejected.
    #[test]
    fn non_positive_donation_amounts_are_rejected(amount in -1_000_000i64..=0) {
        prop_assert!(Donation::create(DonationId::new(), amount, None, None, None).is_err());
    }
}

#[test]
fn order_requires_at_least_one_item() {
    assert!(Order::create(OrderId::new(), Vec::new()).is_err());
}

use approx::assert_abs_diff_eq;
use dam_clearing::{clear, sensitivity};
use dam_core::models::{HourId, Order, Precision, Side, StepCurve};
use rstest::*;

// The worked example: cumulative (volume, price) tiers for one trading hour.
#[fixture]
pub fn h12_orders() -> Vec<Order> {
    vec![
        Order::new("12", Side::Sell, 40.0, 100.0).unwrap(),
        Order::new("12", Side::Sell, 45.0, 300.0).unwrap(),
        Order::new("12", Side::Sell, 55.0, 600.0).unwrap(),
        Order::new("12", Side::Purchase, 70.0, 150.0).unwrap(),
        Order::new("12", Side::Purchase, 50.0, 400.0).unwrap(),
        Order::new("12", Side::Purchase, 20.0, 700.0).unwrap(),
    ]
}

fn curves(orders: &[Order], hour: &str) -> (StepCurve, StepCurve) {
    let hour = HourId::new(hour);
    (
        StepCurve::from_orders(orders, &hour, Side::Sell).unwrap(),
        StepCurve::from_orders(orders, &hour, Side::Purchase).unwrap(),
    )
}

#[rstest]
fn clears_at_the_segment_intersection(h12_orders: Vec<Order>) {
    let (sell, purchase) = curves(&h12_orders, "12");
    let clearing = clear(&sell, &purchase, &Precision::default()).unwrap();

    // The crossing sits on the (300,45)-(600,55) sell segment and the
    // (400,50)-(700,20) purchase segment.
    assert!(clearing.smv > 300.0 && clearing.smv < 600.0);
    assert!(clearing.smp > 20.0 && clearing.smp < 55.0);
    assert_abs_diff_eq!(clearing.smv, 412.5, epsilon = 1e-9);
    assert_abs_diff_eq!(clearing.smp, 48.75, epsilon = 1e-9);
}

#[rstest]
fn clearing_is_deterministic(h12_orders: Vec<Order>) {
    let (sell, purchase) = curves(&h12_orders, "12");
    let first = clear(&sell, &purchase, &Precision::default());
    let second = clear(&sell, &purchase, &Precision::default());
    assert_eq!(first, second);
}

#[rstest]
fn input_order_does_not_matter(mut h12_orders: Vec<Order>) {
    let (sell, purchase) = curves(&h12_orders, "12");
    let expected = clear(&sell, &purchase, &Precision::default());

    h12_orders.reverse();
    let (sell, purchase) = curves(&h12_orders, "12");
    assert_eq!(clear(&sell, &purchase, &Precision::default()), expected);
}

#[rstest]
fn probes_outside_the_book_are_undefined(h12_orders: Vec<Order>) {
    let (sell, purchase) = curves(&h12_orders, "12");
    let clearing = clear(&sell, &purchase, &Precision::default()).unwrap();

    // The sell book spans 100..600 MW; +-500 MW from 412.5 leaves it
    assert_eq!(sensitivity(&sell, &clearing, 500.0), None);
    assert_eq!(sensitivity(&sell, &clearing, -500.0), None);
}

#[rstest]
fn probes_inside_the_book_hit_the_marginal_tier(h12_orders: Vec<Order>) {
    let (sell, purchase) = curves(&h12_orders, "12");
    let clearing = clear(&sell, &purchase, &Precision::default()).unwrap();

    // 412.5 + 100 = 512.5 -> marginal tier (600, 55)
    assert_abs_diff_eq!(
        sensitivity(&sell, &clearing, 100.0).unwrap(),
        55.0 - 48.75,
        epsilon = 1e-9
    );
    // 412.5 - 200 = 212.5 -> marginal tier (300, 45)
    assert_abs_diff_eq!(
        sensitivity(&sell, &clearing, -200.0).unwrap(),
        45.0 - 48.75,
        epsilon = 1e-9
    );
}

#[rstest]
fn disjoint_price_ranges_do_not_clear() {
    let orders = vec![
        Order::new("7", Side::Sell, 80.0, 100.0).unwrap(),
        Order::new("7", Side::Sell, 95.0, 600.0).unwrap(),
        Order::new("7", Side::Purchase, 50.0, 100.0).unwrap(),
        Order::new("7", Side::Purchase, 20.0, 600.0).unwrap(),
    ];

    let (sell, purchase) = curves(&orders, "7");
    assert_eq!(clear(&sell, &purchase, &Precision::default()), None);
}

#[rstest]
fn shared_flat_tier_clears_at_its_cheap_end() {
    // Both sides quote 50 €/MWh across the 300..500 MW range
    let orders = vec![
        Order::new("9", Side::Sell, 40.0, 100.0).unwrap(),
        Order::new("9", Side::Sell, 50.0, 300.0).unwrap(),
        Order::new("9", Side::Sell, 50.0, 500.0).unwrap(),
        Order::new("9", Side::Sell, 60.0, 700.0).unwrap(),
        Order::new("9", Side::Purchase, 70.0, 200.0).unwrap(),
        Order::new("9", Side::Purchase, 50.0, 300.0).unwrap(),
        Order::new("9", Side::Purchase, 50.0, 500.0).unwrap(),
        Order::new("9", Side::Purchase, 30.0, 800.0).unwrap(),
    ];

    let (sell, purchase) = curves(&orders, "9");
    let clearing = clear(&sell, &purchase, &Precision::default()).unwrap();
    assert_abs_diff_eq!(clearing.smv, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(clearing.smp, 50.0, epsilon = 1e-9);
}

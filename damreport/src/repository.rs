use dam_core::{models::Order, ports::OrderRepository};
use std::io::Read;

/// An order repository backed by a JSON array of order records.
///
/// This is the reference adapter for the [`OrderRepository`] port. Records
/// pass through the validating DTOs during deserialization, so a malformed
/// record (missing field, non-numeric price or volume) fails the whole load
/// before any computation begins, rather than being silently coerced.
pub struct JsonOrders<R>(R);

impl<R: Read> JsonOrders<R> {
    /// Wraps a reader producing a JSON array of order records.
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl<R: Read> OrderRepository for JsonOrders<R> {
    type Error = serde_json::Error;

    fn load(self) -> Result<Vec<Order>, Self::Error> {
        serde_json::from_reader(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dam_core::models::Side;

    #[test]
    fn test_load_accepts_upstream_column_names() {
        let raw = r#"[
            {"Hour": "12", "Sale/Purchase": "Sell", "Price": 45.0, "Volume": 300.0},
            {"hour": "12", "side": "Purchase", "price": 50.0, "volume": 400.0}
        ]"#;

        let orders = JsonOrders::new(raw.as_bytes()).load().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].side, Side::Sell);
        assert_eq!(orders[1].side, Side::Purchase);
    }

    #[test]
    fn test_load_fails_fast_on_malformed_record() {
        let raw = r#"[
            {"hour": "12", "side": "Sell", "price": 45.0, "volume": 300.0},
            {"hour": "12", "side": "Sell", "price": 45.0}
        ]"#;

        assert!(JsonOrders::new(raw.as_bytes()).load().is_err());
    }
}

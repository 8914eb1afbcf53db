use std::fmt;

/// The side of the book an order belongs to.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// An offer to deliver energy; cheapest offers clear first.
    Sell,
    /// A bid to consume energy; highest bids clear first.
    Purchase,
}

/// A newtype wrapper for a trading-period label.
///
/// Day-ahead markets identify periods by label rather than by index: a normal
/// day has `"1"` through `"24"`, and clock-change days insert labels such as
/// `"3B"`. The external display form prefixes an `H`, which is what
/// [`HourId::label`] and the `Display` implementation produce.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct HourId(String);

impl HourId {
    /// Wrap a raw period label.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw label, without the display prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The external display form, e.g. `H12`.
    pub fn label(&self) -> String {
        format!("H{}", self.0)
    }
}

impl fmt::Display for HourId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

impl From<&str> for HourId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for HourId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One market bid or offer, as supplied by the order repository.
///
/// The `volume` field is the cumulative eligible quantity at the order's
/// price tier, not an increment; curve construction uses it as-is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "OrderDto", into = "OrderDto")
)]
pub struct Order {
    /// The trading period this order belongs to.
    pub hour: HourId,
    /// Whether this is a sell offer or a purchase bid.
    pub side: Side,
    /// Limit price, in €/MWh. May be negative.
    pub price: f64,
    /// Cumulative eligible quantity at this tier, in MW.
    pub volume: f64,
}

impl Order {
    /// Creates an order, validating the numeric fields.
    pub fn new(
        hour: impl Into<HourId>,
        side: Side,
        price: f64,
        volume: f64,
    ) -> Result<Self, OrderError> {
        if !price.is_finite() {
            return Err(OrderError::NonFinitePrice);
        }
        if !volume.is_finite() || volume < 0.0 {
            return Err(OrderError::InvalidVolume);
        }
        Ok(Self {
            hour: hour.into(),
            side,
            price,
            volume,
        })
    }
}

/// DTO for orders to enable validation during deserialization.
///
/// The field aliases accept the column names used by the upstream tabular
/// extract (`Hour`, `Sale/Purchase`, `Price`, `Volume`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct OrderDto {
    /// The trading period label.
    #[cfg_attr(feature = "serde", serde(alias = "Hour"))]
    pub hour: HourId,
    /// Sell or Purchase.
    #[cfg_attr(feature = "serde", serde(alias = "Sale/Purchase"))]
    pub side: Side,
    /// Limit price.
    #[cfg_attr(feature = "serde", serde(alias = "Price"))]
    pub price: f64,
    /// Cumulative quantity.
    #[cfg_attr(feature = "serde", serde(alias = "Volume"))]
    pub volume: f64,
}

impl TryFrom<OrderDto> for Order {
    type Error = OrderError;

    fn try_from(value: OrderDto) -> Result<Self, Self::Error> {
        Order::new(value.hour, value.side, value.price, value.volume)
    }
}

impl From<Order> for OrderDto {
    fn from(value: Order) -> Self {
        Self {
            hour: value.hour,
            side: value.side,
            price: value.price,
            volume: value.volume,
        }
    }
}

/// Errors that can occur when constructing an order from raw input.
///
/// These are structural input failures: the whole run aborts rather than
/// silently coercing a malformed record.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum OrderError {
    /// The price is NaN or infinite.
    #[error("price must be a finite number")]
    NonFinitePrice,
    /// The volume is NaN, infinite, or negative.
    #[error("volume must be a finite, non-negative number")]
    InvalidVolume,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_nan_price() {
        assert_eq!(
            Order::new("12", Side::Sell, f64::NAN, 100.0).unwrap_err(),
            OrderError::NonFinitePrice
        );
    }

    #[test]
    fn test_reject_negative_volume() {
        assert_eq!(
            Order::new("12", Side::Sell, 40.0, -1.0).unwrap_err(),
            OrderError::InvalidVolume
        );
        assert_eq!(
            Order::new("12", Side::Purchase, 40.0, f64::INFINITY).unwrap_err(),
            OrderError::InvalidVolume
        );
    }

    #[test]
    fn test_negative_price_is_valid() {
        // Day-ahead prices regularly go negative
        assert!(Order::new("3B", Side::Purchase, -50.0, 100.0).is_ok());
    }

    #[test]
    fn test_hour_label() {
        let hour = HourId::new("3B");
        assert_eq!(hour.as_str(), "3B");
        assert_eq!(hour.label(), "H3B");
        assert_eq!(hour.to_string(), "H3B");
    }

    #[test]
    fn test_deserialize_upstream_column_names() {
        let raw = r#"{
            "Hour": "12",
            "Sale/Purchase": "Sell",
            "Price": 45.0,
            "Volume": 300.0
        }"#;

        let order = serde_json::from_str::<Order>(raw).unwrap();
        assert_eq!(order.hour, HourId::new("12"));
        assert_eq!(order.side, Side::Sell);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        // Missing field
        let raw = r#"{"hour": "12", "side": "Sell", "price": 45.0}"#;
        assert!(serde_json::from_str::<Order>(raw).is_err());

        // Non-numeric volume
        let raw = r#"{"hour": "12", "side": "Sell", "price": 45.0, "volume": "lots"}"#;
        assert!(serde_json::from_str::<Order>(raw).is_err());
    }
}

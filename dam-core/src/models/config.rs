use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Decimal rounding applied to reported volumes and prices.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Precision {
    /// Digits kept for volume quantities.
    pub volume: u32,
    /// Digits kept for price quantities.
    pub price: u32,
}

impl Precision {
    /// Rounds a volume to the configured precision.
    pub fn round_volume(&self, value: f64) -> f64 {
        round_to(value, self.volume)
    }

    /// Rounds a price to the configured precision.
    pub fn round_price(&self, value: f64) -> f64 {
        round_to(value, self.price)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            volume: 1,
            price: 2,
        }
    }
}

fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// Configuration for the sensitivity report.
///
/// All three knobs are injected rather than hardcoded; the defaults reproduce
/// the behavior of the upstream analysis (deltas of 500/1000/2000 MW and the
/// standard off-peak calendar).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReportConfig {
    /// Positive offset magnitudes probed on both sides of the clearing
    /// volume, in ascending order.
    pub deltas: Vec<f64>,
    /// Display labels of the off-peak hours; every other hour is peak.
    pub off_peak: IndexSet<String, FxBuildHasher>,
    /// Rounding applied to reported cells.
    pub precision: Precision,
}

impl ReportConfig {
    /// Whether a product label belongs to the off-peak set.
    pub fn is_off_peak(&self, product: &str) -> bool {
        self.off_peak.contains(product)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            deltas: vec![500.0, 1000.0, 2000.0],
            off_peak: [
                "H1", "H2", "H3", "H3B", "H4", "H5", "H6", "H7", "H8", "H21", "H22", "H23", "H24",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            precision: Precision::default(),
        }
    }
}

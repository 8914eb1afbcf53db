use crate::{Set, clear, sensitivity};
use dam_core::models::{HourId, Order, ReportConfig, Side, StepCurve};
use tracing::{Level, event};

/// One row of the day's sensitivity report.
///
/// Either a per-hour row (product `H<hour>`) or one of the synthetic
/// aggregates (`base`, `peak`, `off_peak`). A missing cell means the value
/// is undefined for that row, never zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    /// The product label.
    pub product: String,
    /// The system marginal volume.
    pub smv: Option<f64>,
    /// Sensitivity at the negative offsets, largest magnitude first.
    pub negative: Vec<Option<f64>>,
    /// The system marginal price.
    pub smp: Option<f64>,
    /// Sensitivity at the positive offsets, ascending magnitude.
    pub positive: Vec<Option<f64>>,
}

impl ReportRow {
    fn empty(product: String, deltas: usize) -> Self {
        Self {
            product,
            smv: None,
            negative: vec![None; deltas],
            smp: None,
            positive: vec![None; deltas],
        }
    }

    /// The numeric cells in presentation order: smv, the negative-offset
    /// columns, smp, the positive-offset columns.
    pub fn cells(&self) -> Vec<Option<f64>> {
        let mut cells = Vec::with_capacity(2 + self.negative.len() + self.positive.len());
        cells.push(self.smv);
        cells.extend(&self.negative);
        cells.push(self.smp);
        cells.extend(&self.positive);
        cells
    }

    fn from_cells(product: String, cells: &[Option<f64>], deltas: usize) -> Self {
        Self {
            product,
            smv: cells[0],
            negative: cells[1..1 + deltas].to_vec(),
            smp: cells[1 + deltas],
            positive: cells[2 + deltas..].to_vec(),
        }
    }
}

/// The full day's sensitivity report.
///
/// Rows are ordered `base`, `peak`, `off_peak`, then one row per hour in the
/// order the hours first appear in the input snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// The probed offset magnitudes, ascending.
    pub deltas: Vec<f64>,
    /// The aggregate rows followed by the per-hour rows.
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Column labels in presentation order:
    /// `product, smv, -Δn…-Δ1, smp, +Δ1…+Δn`.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(3 + 2 * self.deltas.len());
        columns.push("product".to_owned());
        columns.push("smv".to_owned());
        for delta in self.deltas.iter().rev() {
            columns.push(format!("-{}", format_delta(*delta)));
        }
        columns.push("smp".to_owned());
        for delta in &self.deltas {
            columns.push(format!("+{}", format_delta(*delta)));
        }
        columns
    }
}

fn format_delta(delta: f64) -> String {
    if delta.fract() == 0.0 {
        format!("{}", delta as i64)
    } else {
        delta.to_string()
    }
}

/// Runs clearing and sensitivity over every hour of a day's snapshot.
///
/// Per-hour failures are local: an hour with a one-sided book or
/// non-intersecting curves contributes a row of missing cells and the run
/// continues. The three aggregate rows average each numeric column over the
/// member hour-rows, skipping missing values rather than propagating them.
pub fn build_report(orders: &[Order], config: &ReportConfig) -> Report {
    let hours: Set<HourId> = orders.iter().map(|order| order.hour.clone()).collect();

    let hour_rows: Vec<ReportRow> = hours
        .iter()
        .map(|hour| hour_row(orders, hour, config))
        .collect();

    let base = aggregate("base", hour_rows.iter(), config);
    let peak = aggregate(
        "peak",
        hour_rows
            .iter()
            .filter(|row| !config.is_off_peak(&row.product)),
        config,
    );
    let off_peak = aggregate(
        "off_peak",
        hour_rows
            .iter()
            .filter(|row| config.is_off_peak(&row.product)),
        config,
    );

    let mut rows = vec![base, peak, off_peak];
    rows.extend(hour_rows);

    Report {
        deltas: config.deltas.clone(),
        rows,
    }
}

fn hour_row(orders: &[Order], hour: &HourId, config: &ReportConfig) -> ReportRow {
    let product = hour.label();

    let (sell, purchase) = match (
        StepCurve::from_orders(orders, hour, Side::Sell),
        StepCurve::from_orders(orders, hour, Side::Purchase),
    ) {
        (Ok(sell), Ok(purchase)) => (sell, purchase),
        (sell, purchase) => {
            event!(
                Level::WARN,
                hour = %hour,
                has_sell = sell.is_ok(),
                has_purchase = purchase.is_ok(),
                "one-sided book, no clearing possible"
            );
            return ReportRow::empty(product, config.deltas.len());
        }
    };

    let Some(clearing) = clear(&sell, &purchase, &config.precision) else {
        event!(Level::WARN, hour = %hour, "curves do not intersect");
        return ReportRow::empty(product, config.deltas.len());
    };

    event!(
        Level::DEBUG,
        hour = %hour,
        smv = clearing.smv,
        smp = clearing.smp,
        "cleared"
    );

    let probe = |delta: f64| {
        sensitivity(&sell, &clearing, delta).map(|deviation| config.precision.round_price(deviation))
    };

    ReportRow {
        product,
        smv: Some(clearing.smv),
        negative: config.deltas.iter().rev().map(|d| probe(-d)).collect(),
        smp: Some(clearing.smp),
        positive: config.deltas.iter().map(|d| probe(*d)).collect(),
    }
}

fn aggregate<'a>(
    product: &str,
    rows: impl Iterator<Item = &'a ReportRow>,
    config: &ReportConfig,
) -> ReportRow {
    let width = 2 + 2 * config.deltas.len();
    let mut sums = vec![0.0; width];
    let mut counts = vec![0usize; width];

    for row in rows {
        for (i, cell) in row.cells().into_iter().enumerate() {
            if let Some(value) = cell {
                sums[i] += value;
                counts[i] += 1;
            }
        }
    }

    let cells: Vec<Option<f64>> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, count)| {
            (*count > 0).then(|| config.precision.round_price(sum / *count as f64))
        })
        .collect();

    ReportRow::from_cells(product.to_owned(), &cells, config.deltas.len())
}

#[cfg(feature = "serde")]
mod ser {
    use super::{Report, ReportRow};
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    // The externally observable shape is the column layout, so rows serialize
    // as maps keyed by the column labels rather than by field name.
    impl Serialize for Report {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let columns = self.columns();
            let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
            for row in &self.rows {
                seq.serialize_element(&Keyed {
                    columns: &columns,
                    row,
                })?;
            }
            seq.end()
        }
    }

    struct Keyed<'a> {
        columns: &'a [String],
        row: &'a ReportRow,
    }

    impl Serialize for Keyed<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.columns.len()))?;
            map.serialize_entry(&self.columns[0], &self.row.product)?;
            for (column, cell) in self.columns[1..].iter().zip(self.row.cells()) {
                map.serialize_entry(column, &cell)?;
            }
            map.end()
        }
    }
}

mod clearing;
mod config;
mod curve;
mod order;

pub use clearing::ClearingPoint;
pub use config::{Precision, ReportConfig};
pub use curve::{CurveError, Point, StepCurve, StepCurveDto};
pub use order::{HourId, Order, OrderDto, OrderError, Side};

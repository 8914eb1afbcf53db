/**
 * Depth-chart data assembly for external renderers.
 */
mod chart;
pub use chart::*;

/**
 * The clearing engine: polyline intersection of the two curves.
 */
mod clearing;
pub use clearing::*;

/**
 * Segment-intersection primitives in (volume, price) space.
 */
mod geometry;
pub use geometry::*;

/**
 * The per-day report aggregator.
 */
mod report;
pub use report::*;

/**
 * The price-sensitivity probe around the clearing point.
 */
mod sensitivity;
pub use sensitivity::*;

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;

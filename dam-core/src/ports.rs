use crate::models::Order;

/// A source of day-ahead order snapshots.
///
/// The clearing engine never performs I/O itself: whatever storage holds the
/// raw order records (a tabular extract, a database, a test fixture) adapts
/// to this trait and hands the engine an immutable snapshot of one trading
/// day. Loading consumes the repository, reflecting that a snapshot is read
/// exactly once per run.
pub trait OrderRepository {
    /// The error produced when the snapshot cannot be loaded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads the full order snapshot for one trading day.
    fn load(self) -> Result<Vec<Order>, Self::Error>;
}

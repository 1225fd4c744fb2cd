//! Pure aggregation functions over records already materialized in memory.
//!
//! Every function here is synchronous, read-only and total: empty input
//! produces a zero-valued summary, never a division fault. Aggregates are
//! recomputed from scratch on every request; nothing is cached.

pub mod customers;
pub mod drivers;
pub mod earnings;
pub mod ratings;
pub mod trips;

pub use customers::{customer_stats, CustomerStats};
pub use drivers::{driver_stats, driver_stats_enhanced, DriverStats};
pub use earnings::{earnings_summary, EarningsSummary};
pub use ratings::{rating_analytics, RatingAnalytics};
pub use trips::{trip_analytics, TripAnalytics};

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::{
    customer_stats, driver_stats, trip_analytics, CustomerStats, DriverStats, TripAnalytics,
};
use crate::readers::{CustomerReader, DriverReader, TripReader};

/// The home-page summary block. Readers degrade to empty lists on store
/// faults, so a broken store renders as an all-zero dashboard rather than
/// an error page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub driver_stats: DriverStats,
    pub customer_stats: CustomerStats,
    pub trip_stats: TripAnalytics,
    pub generated_at: DateTime<Utc>,
}

pub async fn overview(
    drivers: &DriverReader,
    customers: &CustomerReader,
    trips: &TripReader,
) -> DashboardOverview {
    let driver_list = drivers.all().await;
    let customer_list = customers.all().await;
    let trip_list = trips.all().await;

    DashboardOverview {
        driver_stats: driver_stats(&driver_list),
        customer_stats: customer_stats(&customer_list),
        trip_stats: trip_analytics(&trip_list),
        generated_at: Utc::now(),
    }
}

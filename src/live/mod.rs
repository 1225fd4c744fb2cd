//! Point-in-time status snapshots for a single driver or customer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{LocationSnapshot, Trip};
use crate::readers::{CustomerReader, DriverReader, TripReader};

#[derive(Debug, Clone, Serialize)]
pub struct DriverLiveStatus {
    pub driver_id: String,
    pub location: LocationSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_trip: Option<Trip>,
    /// When this snapshot was assembled. Nothing is cached; a fresh call
    /// yields a fresh snapshot.
    pub as_of: DateTime<Utc>,
}

/// Location fallback order: the dedicated location collection, then the
/// position embedded on the driver record (only while the driver is online
/// there), then the unavailable sentinel. The current trip is the
/// newest active one, the newest of any status if nothing is active, or
/// absent for a driver with no trips.
pub async fn driver_live_status(
    driver_id: &str,
    drivers: &DriverReader,
    trips: &TripReader,
) -> DriverLiveStatus {
    let location = match drivers.location(driver_id).await {
        Some(snapshot) => snapshot,
        None => match drivers.by_id(driver_id).await {
            Some(driver) if driver.is_online => driver
                .geo_position
                .map(|point| LocationSnapshot::from_point(point, true))
                .unwrap_or_else(LocationSnapshot::unavailable),
            _ => LocationSnapshot::unavailable(),
        },
    };

    let current_trip = pick_current_trip(trips.for_driver(driver_id).await);

    DriverLiveStatus {
        driver_id: driver_id.to_string(),
        location,
        current_trip,
        as_of: Utc::now(),
    }
}

/// Customer projection is location-only and skips the online gate: the
/// embedded position is used whenever the location collection has nothing.
pub async fn customer_live_location(
    customer_id: &str,
    customers: &CustomerReader,
) -> LocationSnapshot {
    match customers.location(customer_id).await {
        Some(snapshot) => snapshot,
        None => match customers.by_id(customer_id).await {
            Some(customer) => customer
                .geo_position
                .map(|point| LocationSnapshot::from_point(point, false))
                .unwrap_or_else(LocationSnapshot::unavailable),
            None => LocationSnapshot::unavailable(),
        },
    }
}

fn pick_current_trip(trips: Vec<Trip>) -> Option<Trip> {
    let newest = |a: &&Trip, b: &&Trip| {
        a.created_at
            .as_deref()
            .unwrap_or("")
            .cmp(b.created_at.as_deref().unwrap_or(""))
    };

    if let Some(active) = trips.iter().filter(|trip| trip.is_active()).max_by(newest) {
        return Some(active.clone());
    }

    trips.iter().max_by(newest).cloned()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::pick_current_trip;
    use crate::models::Trip;

    fn trip(id: &str, status: &str, created_at: &str) -> Trip {
        let doc = json!({ "status": status, "dateCreated": created_at });
        Trip::from_document(id.to_string(), doc.as_object().unwrap())
    }

    #[test]
    fn newest_active_trip_wins() {
        let trips = vec![
            trip("t1", "completed", "2024-06-05T00:00:00Z"),
            trip("t2", "in_progress", "2024-06-01T00:00:00Z"),
            trip("t3", "accepted", "2024-06-03T00:00:00Z"),
        ];
        assert_eq!(pick_current_trip(trips).unwrap().id, "t3");
    }

    #[test]
    fn falls_back_to_newest_of_any_status() {
        let trips = vec![
            trip("t1", "completed", "2024-06-01T00:00:00Z"),
            trip("t2", "cancelled", "2024-06-02T00:00:00Z"),
        ];
        assert_eq!(pick_current_trip(trips).unwrap().id, "t2");
    }

    #[test]
    fn no_trips_means_no_current_trip() {
        assert!(pick_current_trip(Vec::new()).is_none());
    }
}

use serde::Serialize;

use crate::models::Trip;
use crate::readers::{CustomerReader, DriverReader};

pub const DRIVER_NOT_FOUND: &str = "Driver Not Found";
pub const CUSTOMER_NOT_FOUND: &str = "Customer Not Found";
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// A trip with display names attached. `driver_name` is omitted entirely
/// for unassigned trips (no driver id on the document); `customer_name` is
/// always present, bottoming out at a placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTrip {
    pub trip: Trip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    pub customer_name: String,
}

pub async fn enrich_trip(
    trip: Trip,
    drivers: &DriverReader,
    customers: &CustomerReader,
) -> EnrichedTrip {
    let driver_name = match trip.driver_id.as_deref() {
        None => None,
        Some(driver_id) => match drivers.by_id(driver_id).await {
            Some(driver) => Some(driver.full_name()),
            None => Some(DRIVER_NOT_FOUND.to_string()),
        },
    };

    let customer_name = resolve_customer_name(&trip, customers).await;

    EnrichedTrip {
        trip,
        driver_name,
        customer_name,
    }
}

pub async fn enrich_trips(
    trips: Vec<Trip>,
    drivers: &DriverReader,
    customers: &CustomerReader,
) -> Vec<EnrichedTrip> {
    let mut enriched = Vec::with_capacity(trips.len());
    for trip in trips {
        enriched.push(enrich_trip(trip, drivers, customers).await);
    }
    enriched
}

/// Preference order: linked customer record, then the denormalized name on
/// the trip document, then the recipient name. The final placeholder
/// depends on whether a customer id was present but unresolvable.
async fn resolve_customer_name(trip: &Trip, customers: &CustomerReader) -> String {
    let denormalized = || {
        trip.customer_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                trip.recipient_name
                    .clone()
                    .filter(|name| !name.trim().is_empty())
            })
    };

    match trip.customer_id.as_deref() {
        Some(customer_id) => {
            let linked = customers
                .by_id(customer_id)
                .await
                .map(|customer| customer.full_name())
                .filter(|name| !name.is_empty());

            linked
                .or_else(denormalized)
                .unwrap_or_else(|| CUSTOMER_NOT_FOUND.to_string())
        }
        None => denormalized().unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
    }
}

use serde::Serialize;

use crate::models::{Rating, Trip};
use crate::readers::{CustomerReader, TripReader};

/// A rating decorated with the reviewer's name and a best-effort link to
/// the trip it came from. Ratings store no trip reference, so the link is
/// inferred by matching on (driver, customer) and is non-authoritative; a
/// miss simply omits the fields.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRating {
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip: Option<Trip>,
}

pub async fn enrich_rating(
    rating: Rating,
    customers: &CustomerReader,
    trips: &TripReader,
) -> EnrichedRating {
    let customer_name = match rating.customer_id.as_deref() {
        Some(customer_id) => customers
            .by_id(customer_id)
            .await
            .map(|customer| customer.full_name())
            .filter(|name| !name.is_empty()),
        None => None,
    };

    let trip = infer_trip(&rating, trips).await;

    EnrichedRating {
        rating,
        customer_name,
        trip,
    }
}

pub async fn enrich_ratings(
    ratings: Vec<Rating>,
    customers: &CustomerReader,
    trips: &TripReader,
) -> Vec<EnrichedRating> {
    let mut enriched = Vec::with_capacity(ratings.len());
    for rating in ratings {
        enriched.push(enrich_rating(rating, customers, trips).await);
    }
    enriched
}

/// Any trip for the (driver, customer) pair, falling back to any trip for
/// the driver. The data model has no real foreign key here, so any match
/// is acceptable.
async fn infer_trip(rating: &Rating, trips: &TripReader) -> Option<Trip> {
    let driver_id = rating.driver_id.as_deref()?;

    if let Some(customer_id) = rating.customer_id.as_deref() {
        if let Some(trip) = trips.for_driver_and_customer(driver_id, customer_id).await {
            return Some(trip);
        }
    }

    trips.for_driver(driver_id).await.into_iter().next()
}

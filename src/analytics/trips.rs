use serde::Serialize;

use crate::analytics::round2;
use crate::models::Trip;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TripAnalytics {
    pub total_trips: usize,
    pub completed_trips: usize,
    /// Percentage in [0, 100] rounded to 2 decimal places; 0 for an empty
    /// list.
    pub completion_rate: f64,
    /// Sum over every trip's resolved amount, regardless of status.
    pub total_revenue: f64,
}

pub fn trip_analytics(trips: &[Trip]) -> TripAnalytics {
    let total_trips = trips.len();
    let completed_trips = trips.iter().filter(|trip| trip.is_completed()).count();

    let completion_rate = if total_trips == 0 {
        0.0
    } else {
        round2(completed_trips as f64 / total_trips as f64 * 100.0)
    };

    let total_revenue = trips.iter().map(|trip| trip.amount).sum();

    TripAnalytics {
        total_trips,
        completed_trips,
        completion_rate,
        total_revenue,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::trip_analytics;
    use crate::models::Trip;

    fn trip(status: &str, amount: serde_json::Value) -> Trip {
        let doc = json!({ "status": status, "fare": amount });
        Trip::from_document("t".to_string(), doc.as_object().unwrap())
    }

    #[test]
    fn empty_list_is_zero_rate_not_a_fault() {
        let analytics = trip_analytics(&[]);
        assert_eq!(analytics.total_trips, 0);
        assert_eq!(analytics.completion_rate, 0.0);
        assert_eq!(analytics.total_revenue, 0.0);
    }

    #[test]
    fn completion_rate_rounds_to_two_decimals() {
        let trips = vec![
            trip("completed", json!(10)),
            trip("pending", json!("5")),
            trip("unknown_status", json!(7)),
        ];
        let analytics = trip_analytics(&trips);

        assert_eq!(analytics.total_trips, 3);
        assert_eq!(analytics.completed_trips, 1);
        assert_eq!(analytics.completion_rate, 33.33);
        assert_eq!(analytics.total_revenue, 22.0);
        assert!(analytics.completion_rate >= 0.0 && analytics.completion_rate <= 100.0);
    }
}

use serde::Serialize;

use crate::coerce;
use crate::store::Document;

/// Field names in the DriversRatings collection. The score has appeared
/// under both `rating` and `stars` in live data; `rating` is authoritative
/// when both are present.
pub mod fields {
    pub const DRIVER_ID: &str = "driverID";
    pub const CUSTOMER_ID: &str = "customerID";
    pub const CREATED_AT: &str = "createdAt";
}

pub const SCORE_FIELDS: &[&str] = &["rating", "stars"];

#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    pub id: String,
    pub driver_id: Option<String>,
    pub customer_id: Option<String>,
    /// `None` when the score field is missing or non-numeric; such ratings
    /// still count toward the total but stay out of the histogram.
    pub score: Option<f64>,
    pub created_at: Option<String>,
}

impl Rating {
    pub fn from_document(id: String, doc: &Document) -> Self {
        let score = SCORE_FIELDS
            .iter()
            .find(|field| doc.contains_key(**field))
            .and_then(|field| coerce::numeric_field(doc, field));

        Self {
            id,
            driver_id: coerce::str_field(doc, fields::DRIVER_ID),
            customer_id: coerce::str_field(doc, fields::CUSTOMER_ID),
            score,
            created_at: coerce::str_field(doc, fields::CREATED_AT),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Rating;

    fn rating(value: serde_json::Value) -> Rating {
        Rating::from_document("r1".to_string(), value.as_object().unwrap())
    }

    #[test]
    fn rating_field_wins_over_stars() {
        let r = rating(json!({ "rating": 4, "stars": 2 }));
        assert_eq!(r.score, Some(4.0));
    }

    #[test]
    fn stars_is_the_fallback_score_field() {
        let r = rating(json!({ "stars": "3.5" }));
        assert_eq!(r.score, Some(3.5));
    }

    #[test]
    fn non_numeric_score_is_absent() {
        let r = rating(json!({ "rating": "great" }));
        assert_eq!(r.score, None);
    }
}

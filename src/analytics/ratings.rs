use serde::Serialize;

use crate::analytics::round2;
use crate::models::Rating;

/// How many of the newest ratings the driver detail page shows.
pub const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RatingAnalytics {
    pub total_ratings: usize,
    /// Arithmetic mean over all ratings, rounded to 2 decimal places.
    /// Ratings without a numeric score contribute zero.
    pub average_rating: f64,
    /// Counts per integer star, index 0 = 1 star. Numeric scores clamp
    /// into [1, 5]; non-numeric scores stay out of the histogram.
    pub histogram: [u64; 5],
    pub count_3_0_and_up: usize,
    pub count_4_0_and_up: usize,
    pub count_4_5_and_up: usize,
    /// Newest first by creation timestamp; missing timestamps sort oldest.
    pub recent: Vec<Rating>,
}

pub fn rating_analytics(ratings: &[Rating]) -> RatingAnalytics {
    let total_ratings = ratings.len();
    if total_ratings == 0 {
        return RatingAnalytics::default();
    }

    let mut histogram = [0u64; 5];
    let mut score_sum = 0.0;
    let mut count_3_0_and_up = 0;
    let mut count_4_0_and_up = 0;
    let mut count_4_5_and_up = 0;

    for rating in ratings {
        let Some(score) = rating.score else {
            continue;
        };

        score_sum += score;
        let star = (score.round() as i64).clamp(1, 5);
        histogram[(star - 1) as usize] += 1;

        if score >= 3.0 {
            count_3_0_and_up += 1;
        }
        if score >= 4.0 {
            count_4_0_and_up += 1;
        }
        if score >= 4.5 {
            count_4_5_and_up += 1;
        }
    }

    let mut recent: Vec<Rating> = ratings.to_vec();
    recent.sort_by(|a, b| {
        b.created_at
            .as_deref()
            .unwrap_or("")
            .cmp(a.created_at.as_deref().unwrap_or(""))
    });
    recent.truncate(RECENT_LIMIT);

    RatingAnalytics {
        total_ratings,
        average_rating: round2(score_sum / total_ratings as f64),
        histogram,
        count_3_0_and_up,
        count_4_0_and_up,
        count_4_5_and_up,
        recent,
    }
}

use serde::Serialize;

use crate::models::{Balance, Trip};

#[derive(Debug, Clone, Default, Serialize)]
pub struct EarningsSummary {
    /// Sum over completed trips only, via the trip amount field precedence.
    pub total_earnings: f64,
    /// Completed trip count; cancelled and in-flight trips don't earn.
    pub total_trips: usize,
    pub avg_earnings_per_trip: f64,
    pub current_balance: f64,
    pub pending_amount: f64,
    /// Lifetime earnings minus what is still on the balance.
    pub total_withdrawals: f64,
}

pub fn earnings_summary(trips: &[Trip], balance: Option<&Balance>) -> EarningsSummary {
    let completed: Vec<&Trip> = trips.iter().filter(|trip| trip.is_completed()).collect();

    let total_trips = completed.len();
    let total_earnings: f64 = completed.iter().map(|trip| trip.amount).sum();
    let avg_earnings_per_trip = if total_trips == 0 {
        0.0
    } else {
        total_earnings / total_trips as f64
    };

    let (current_balance, pending_amount, total_earned) = match balance {
        Some(balance) => (
            balance.current_balance,
            balance.pending_amount,
            balance.total_earned,
        ),
        None => (0.0, 0.0, 0.0),
    };

    EarningsSummary {
        total_earnings,
        total_trips,
        avg_earnings_per_trip,
        current_balance,
        pending_amount,
        total_withdrawals: total_earned - current_balance,
    }
}

use serde::Serialize;

use crate::coerce;
use crate::store::Document;

/// Field names in the DriverBalances collection; documents are keyed by the
/// driver's id.
pub mod fields {
    pub const CURRENT_BALANCE: &str = "currentBalance";
    pub const PENDING_AMOUNT: &str = "pendingAmount";
    pub const TOTAL_EARNED: &str = "totalEarned";
}

#[derive(Debug, Clone, Serialize)]
pub struct Balance {
    pub driver_id: String,
    pub current_balance: f64,
    pub pending_amount: f64,
    pub total_earned: f64,
}

impl Balance {
    pub fn from_document(driver_id: String, doc: &Document) -> Self {
        Self {
            driver_id,
            current_balance: coerce::first_money(doc, &[fields::CURRENT_BALANCE]),
            pending_amount: coerce::first_money(doc, &[fields::PENDING_AMOUNT]),
            total_earned: coerce::first_money(doc, &[fields::TOTAL_EARNED]),
        }
    }
}

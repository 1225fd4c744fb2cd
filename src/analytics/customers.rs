use serde::Serialize;

use crate::models::Customer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerStats {
    pub total_customers: usize,
}

pub fn customer_stats(customers: &[Customer]) -> CustomerStats {
    CustomerStats {
        total_customers: customers.len(),
    }
}

//! Recipient-list assembly for bulk notifications. Actual delivery is the
//! host application's job; this module only filters out records without a
//! usable address.

use crate::models::{Customer, Driver};

pub fn customer_recipients(customers: &[Customer]) -> Vec<String> {
    customers
        .iter()
        .filter_map(|customer| customer.email.clone())
        .filter(|email| !email.trim().is_empty())
        .collect()
}

pub fn driver_recipients(drivers: &[Driver]) -> Vec<String> {
    drivers
        .iter()
        .filter_map(|driver| driver.email.clone())
        .filter(|email| !email.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{customer_recipients, driver_recipients};
    use crate::models::{Customer, Driver};

    #[test]
    fn skips_records_without_an_address() {
        let customers = vec![
            Customer::from_document(
                "c1".to_string(),
                json!({ "email": "ada@example.com" }).as_object().unwrap(),
            ),
            Customer::from_document("c2".to_string(), json!({}).as_object().unwrap()),
            Customer::from_document(
                "c3".to_string(),
                json!({ "email": "  " }).as_object().unwrap(),
            ),
        ];
        assert_eq!(customer_recipients(&customers), vec!["ada@example.com"]);

        let drivers = vec![Driver::from_document(
            "d1".to_string(),
            json!({ "email": "sam@example.com" }).as_object().unwrap(),
        )];
        assert_eq!(driver_recipients(&drivers), vec!["sam@example.com"]);
    }
}

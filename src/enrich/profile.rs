use serde::Serialize;

use crate::models::{Driver, Vehicle};
use crate::readers::{DriverReader, VehicleReader};
use crate::store::Document;

/// Everything the driver review page needs in one fetch: the driver, their
/// uploaded verification documents and their registered vehicle. Documents
/// stay raw; their shape varies per driver.
#[derive(Debug, Clone, Serialize)]
pub struct DriverProfile {
    pub driver: Driver,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
}

/// `None` only when the driver itself is missing; absent documents or
/// vehicle degrade to empty sections on the page.
pub async fn driver_profile(
    driver_id: &str,
    drivers: &DriverReader,
    vehicles: &VehicleReader,
) -> Option<DriverProfile> {
    let driver = drivers.by_id(driver_id).await?;
    let documents = drivers.documents(driver_id).await;
    let vehicle = vehicles.by_driver(driver_id).await;

    Some(DriverProfile {
        driver,
        documents,
        vehicle,
    })
}

use serde::Serialize;

use crate::models::Vehicle;
use crate::readers::DriverReader;

pub const STATUS_PENDING: &str = "Pending Approval";
pub const STATUS_APPROVED: &str = "Approved";
pub const STATUS_ACTIVE: &str = "Active";

const UNKNOWN_DRIVER: &str = "Unknown Driver";

#[derive(Debug, Clone, Serialize)]
pub struct EnrichedVehicle {
    pub vehicle: Vehicle,
    pub driver_name: String,
    pub status: &'static str,
}

/// The vehicle review board: every vehicle classified as pending, approved
/// or active (approved with its owner currently online), with bucket
/// counts. Buckets are disjoint; active vehicles do not recount as
/// approved.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleBoard {
    pub vehicles: Vec<EnrichedVehicle>,
    pub pending_count: usize,
    pub approved_count: usize,
    pub active_count: usize,
}

pub async fn vehicle_board(vehicles: Vec<Vehicle>, drivers: &DriverReader) -> VehicleBoard {
    let mut board = VehicleBoard {
        vehicles: Vec::with_capacity(vehicles.len()),
        pending_count: 0,
        approved_count: 0,
        active_count: 0,
    };

    for vehicle in vehicles {
        let driver = match vehicle.driver_id.as_deref() {
            Some(driver_id) => drivers.by_id(driver_id).await,
            None => None,
        };

        // The review page's fallback text differs from the listing pages:
        // missing name parts render as "Unknown" / "Driver" here.
        let driver_name = match &driver {
            Some(driver) => format!(
                "{} {}",
                driver.first_name.as_deref().unwrap_or("Unknown"),
                driver.last_name.as_deref().unwrap_or("Driver"),
            ),
            None => UNKNOWN_DRIVER.to_string(),
        };

        let status = if !vehicle.is_approved {
            board.pending_count += 1;
            STATUS_PENDING
        } else if driver.as_ref().is_some_and(|d| d.is_online) {
            board.active_count += 1;
            STATUS_ACTIVE
        } else {
            board.approved_count += 1;
            STATUS_APPROVED
        };

        board.vehicles.push(EnrichedVehicle {
            vehicle,
            driver_name,
            status,
        });
    }

    board
}

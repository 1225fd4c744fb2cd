use serde::Serialize;

use crate::models::PaymentSetting;
use crate::readers::VehicleReader;

/// A payment setting with its vehicle type resolved for display. A failed
/// type lookup echoes the raw id as the display name so the settings page
/// still renders something identifying.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedPaymentSetting {
    pub setting: PaymentSetting,
    pub vehicle_type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type_icon: Option<String>,
}

pub async fn enrich_payment_settings(
    settings: Vec<PaymentSetting>,
    vehicles: &VehicleReader,
) -> Vec<EnrichedPaymentSetting> {
    let mut enriched = Vec::with_capacity(settings.len());

    for setting in settings {
        let vehicle_type = match setting.vehicle_type_id.as_deref() {
            Some(type_id) => vehicles.type_by_id(type_id).await,
            None => None,
        };

        let (vehicle_type_name, vehicle_type_icon) = match vehicle_type {
            Some(vehicle_type) => (
                vehicle_type
                    .name
                    .unwrap_or_else(|| setting.vehicle_type_id.clone().unwrap_or_default()),
                vehicle_type.icon,
            ),
            None => (
                setting.vehicle_type_id.clone().unwrap_or_default(),
                None,
            ),
        };

        enriched.push(EnrichedPaymentSetting {
            setting,
            vehicle_type_name,
            vehicle_type_icon,
        });
    }

    enriched
}

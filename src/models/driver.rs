use serde::Serialize;

use crate::coerce;
use crate::models::location::GeoPoint;
use crate::store::Document;

/// Field names in the Drivers collection.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const STATUS: &str = "status";
    pub const IS_APPROVED: &str = "isApproved";
    pub const IS_DRIVER_ONLINE: &str = "isDriverOnline";
    pub const GEO_POSITION: &str = "geoPosition";
    pub const PROFILE_PIC: &str = "profilePic";
    pub const DATE_CREATED: &str = "dateCreated";
}

#[derive(Debug, Clone, Serialize)]
pub struct Driver {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Free-form lifecycle string; the basic stats variant treats
    /// `"active"` as online.
    pub status: Option<String>,
    pub is_approved: bool,
    pub is_online: bool,
    pub geo_position: Option<GeoPoint>,
    pub profile_pic: Option<String>,
    pub created_at: Option<String>,
}

impl Driver {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            first_name: coerce::str_field(doc, fields::FIRST_NAME),
            last_name: coerce::str_field(doc, fields::LAST_NAME),
            email: coerce::str_field(doc, fields::EMAIL),
            phone_number: coerce::str_field(doc, fields::PHONE_NUMBER),
            status: coerce::str_field(doc, fields::STATUS),
            is_approved: coerce::bool_field(doc, fields::IS_APPROVED),
            is_online: coerce::bool_field(doc, fields::IS_DRIVER_ONLINE),
            geo_position: GeoPoint::from_value(doc.get(fields::GEO_POSITION)),
            profile_pic: coerce::str_field(doc, fields::PROFILE_PIC),
            created_at: coerce::str_field(doc, fields::DATE_CREATED),
        }
    }

    pub fn full_name(&self) -> String {
        coerce::full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Driver;

    #[test]
    fn parses_a_partial_document_with_defaults() {
        let doc = json!({
            "firstName": "Ada",
            "isDriverOnline": true,
            "geoPosition": { "latitude": 6.52, "longitude": 3.37 }
        });
        let driver = Driver::from_document("d1".to_string(), doc.as_object().unwrap());

        assert_eq!(driver.id, "d1");
        assert_eq!(driver.full_name(), "Ada");
        assert!(driver.is_online);
        assert!(!driver.is_approved);
        assert_eq!(driver.geo_position.unwrap().latitude, 6.52);
        assert_eq!(driver.email, None);
    }
}

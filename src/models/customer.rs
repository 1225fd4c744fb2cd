use serde::Serialize;

use crate::coerce;
use crate::models::location::GeoPoint;
use crate::store::Document;

/// Field names in the Customers collection.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const GEO_POSITION: &str = "geoPosition";
    pub const PROFILE_PIC: &str = "profilePic";
    pub const DATE_CREATED: &str = "dateCreated";
}

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub geo_position: Option<GeoPoint>,
    pub profile_pic: Option<String>,
    pub created_at: Option<String>,
}

impl Customer {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            first_name: coerce::str_field(doc, fields::FIRST_NAME),
            last_name: coerce::str_field(doc, fields::LAST_NAME),
            email: coerce::str_field(doc, fields::EMAIL),
            phone_number: coerce::str_field(doc, fields::PHONE_NUMBER),
            geo_position: GeoPoint::from_value(doc.get(fields::GEO_POSITION)),
            profile_pic: coerce::str_field(doc, fields::PROFILE_PIC),
            created_at: coerce::str_field(doc, fields::DATE_CREATED),
        }
    }

    pub fn full_name(&self) -> String {
        coerce::full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

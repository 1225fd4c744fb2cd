pub mod balance;
pub mod customer;
pub mod driver;
pub mod faq;
pub mod location;
pub mod payment;
pub mod rating;
pub mod trip;
pub mod vehicle;

pub use balance::Balance;
pub use customer::Customer;
pub use driver::Driver;
pub use faq::Faq;
pub use location::{GeoPoint, LocationSnapshot};
pub use payment::{PaymentMode, PaymentSetting};
pub use rating::Rating;
pub use trip::Trip;
pub use vehicle::{Vehicle, VehicleType};

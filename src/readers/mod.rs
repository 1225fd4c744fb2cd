//! Per-entity accessors over the document store.
//!
//! Readers normalize raw documents into typed records and enforce the
//! fail-soft policy: a store fault is logged and collapsed into an empty
//! result (reads) or a failure flag (writes), never propagated. The
//! dashboard always renders, even with partial data.

pub mod customers;
pub mod drivers;
pub mod faqs;
pub mod payments;
pub mod ratings;
pub mod trips;
pub mod vehicles;

pub use customers::CustomerReader;
pub use drivers::DriverReader;
pub use faqs::FaqReader;
pub use payments::PaymentReader;
pub use ratings::RatingReader;
pub use trips::TripReader;
pub use vehicles::VehicleReader;

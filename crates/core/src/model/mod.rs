//! Partner record types
//!
//! Every record that takes part in a merge exposes its owning customer
//! through [`HasCustomerId`]. There is no other relationship between records.

pub mod address;
pub mod partner;
pub mod phone;

pub use address::AddressInformation;
pub use partner::{IndividualPartner, IndividualPartnerInformation};
pub use phone::{PhoneNumber, PhoneNumberId, PhoneNumberInformation};

/// Join key shared by all record types
pub type CustomerId = i32;

/// Records that belong to a single customer
pub trait HasCustomerId {
    fn customer_id(&self) -> CustomerId;
}

impl<T: HasCustomerId + ?Sized> HasCustomerId for &T {
    fn customer_id(&self) -> CustomerId {
        (**self).customer_id()
    }
}

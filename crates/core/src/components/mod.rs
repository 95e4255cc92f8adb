// Partner pipeline components

pub mod addresses;
pub mod partners;
pub mod phones;
pub mod register;

pub use addresses::PartnersWithAddresses;
pub use partners::Partners;
pub use phones::PartnersWithPhones;
pub use register::{ADDRESSES, PARTNERS, PHONES, PartnerSources, register_components};

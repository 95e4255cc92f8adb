// Registration of the partner components
use std::sync::Arc;

use super::{Partners, PartnersWithAddresses, PartnersWithPhones};
use crate::model::{
    AddressInformation, IndividualPartner, IndividualPartnerInformation, PhoneNumberInformation,
};
use crate::pipeline::ComponentRegistry;
use crate::source::RecordSource;

/// Registry name of [`Partners`]
pub const PARTNERS: &str = "partners";

/// Registry name of [`PartnersWithAddresses`]
pub const ADDRESSES: &str = "addresses";

/// Registry name of [`PartnersWithPhones`]
pub const PHONES: &str = "phones";

/// Backing sources shared by the partner components
#[derive(Clone)]
pub struct PartnerSources {
    pub partners: Arc<dyn RecordSource<IndividualPartnerInformation>>,
    pub addresses: Arc<dyn RecordSource<AddressInformation>>,
    pub phones: Arc<dyn RecordSource<PhoneNumberInformation>>,
}

/// Register the partner components under their default names
pub fn register_components(
    registry: &mut ComponentRegistry<IndividualPartner>,
    sources: &PartnerSources,
) {
    let partners = sources.partners.clone();
    registry.register(PARTNERS, move || Box::new(Partners::new(partners.clone())));

    let addresses = sources.addresses.clone();
    registry.register(ADDRESSES, move || {
        Box::new(PartnersWithAddresses::new(addresses.clone()))
    });

    let phones = sources.phones.clone();
    registry.register(PHONES, move || {
        Box::new(PartnersWithPhones::new(phones.clone()))
    });
}

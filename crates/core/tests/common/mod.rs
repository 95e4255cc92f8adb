// Shared fixtures for partner-core tests
#![allow(dead_code)]

use async_trait::async_trait;
use partner_core::components::PartnerSources;
use partner_core::error::{PartnerError, Result};
use partner_core::model::{AddressInformation, IndividualPartnerInformation, PhoneNumberInformation};
use partner_core::source::{RecordSource, StaticSource};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn partner_info(customer_id: i32, first_name: &str) -> IndividualPartnerInformation {
    IndividualPartnerInformation {
        customer_id,
        first_name: first_name.to_string(),
        preferred_name: String::new(),
        middle_name: String::new(),
        last_name: "W".to_string(),
        suffix: String::new(),
        email: String::new(),
        culture: "en-US".to_string(),
        is_primary_decision_maker: true,
    }
}

pub fn address(customer_id: i32, line1: &str, city: &str) -> AddressInformation {
    AddressInformation {
        customer_id,
        address_type_id: 1,
        address_line1: line1.to_string(),
        address_line2: String::new(),
        city: city.to_string(),
        region_id: "IA".to_string(),
        postal_code: "12345".to_string(),
        county_id: 1,
        county: "Scott".to_string(),
        country_id: "US".to_string(),
        latitude: 0.0,
        longitude: 0.0,
    }
}

pub fn phone(phone_number_id: i32, customer_id: i32, number: &str, is_primary: bool) -> PhoneNumberInformation {
    PhoneNumberInformation {
        phone_number_id,
        customer_id,
        number: number.to_string(),
        phone_number_type_id: 1,
        is_primary,
    }
}

/// Partners 1, 2 and 3
pub fn partners() -> Vec<IndividualPartnerInformation> {
    vec![partner_info(1, "Don"), partner_info(2, "Kyla"), partner_info(3, "Vern")]
}

/// Three addresses, all owned by partner 1
pub fn addresses() -> Vec<AddressInformation> {
    vec![
        address(1, "9876", "City"),
        address(1, "1234", "Town"),
        address(1, "444", "Metropolis"),
    ]
}

/// Phones owned by partners 1, 1 and 2
pub fn phones() -> Vec<PhoneNumberInformation> {
    vec![
        phone(1, 1, "1234567890", true),
        phone(2, 1, "5551231234", false),
        phone(3, 2, "5553214321", false),
    ]
}

pub fn sources() -> PartnerSources {
    PartnerSources {
        partners: Arc::new(StaticSource::new("partners", partners())),
        addresses: Arc::new(StaticSource::new("addresses", addresses())),
        phones: Arc::new(StaticSource::new("phones", phones())),
    }
}

/// Source that always fails and counts how often it was asked
pub struct FailingSource {
    pub calls: Arc<AtomicUsize>,
}

impl FailingSource {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl<R: Send + 'static> RecordSource<R> for FailingSource {
    fn name(&self) -> String {
        "failing".to_string()
    }

    async fn fetch(&self) -> Result<Vec<R>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PartnerError::data_source("failing", "connection refused"))
    }
}

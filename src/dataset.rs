//! Record sets backing the partner components

use std::path::Path;
use std::sync::Arc;

use partner_core::components::PartnerSources;
use partner_core::error::Result;
use partner_core::model::{AddressInformation, IndividualPartnerInformation, PhoneNumberInformation};
use partner_core::source::StaticSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Partners, addresses and phones loaded together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub partners: Vec<IndividualPartnerInformation>,
    #[serde(default)]
    pub addresses: Vec<AddressInformation>,
    #[serde(default)]
    pub phones: Vec<PhoneNumberInformation>,
}

impl Dataset {
    /// Load a dataset from a JSON file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        debug!(
            "Loaded {:?}: {} partners, {} addresses, {} phones",
            path,
            dataset.partners.len(),
            dataset.addresses.len(),
            dataset.phones.len()
        );
        Ok(dataset)
    }

    /// Built-in demo data: three partners, three addresses for partner 1,
    /// two phones for partner 1 and one for partner 2
    pub fn sample() -> Self {
        let partner = |customer_id, first_name: &str| IndividualPartnerInformation {
            customer_id,
            first_name: first_name.to_string(),
            preferred_name: String::new(),
            middle_name: String::new(),
            last_name: "W".to_string(),
            suffix: String::new(),
            email: String::new(),
            culture: "en-US".to_string(),
            is_primary_decision_maker: true,
        };

        let address = |line1: &str, city: &str, postal_code: &str, county: &str| {
            AddressInformation {
                customer_id: 1,
                address_type_id: 1,
                address_line1: line1.to_string(),
                address_line2: String::new(),
                city: city.to_string(),
                region_id: "IA".to_string(),
                postal_code: postal_code.to_string(),
                county_id: 1,
                county: county.to_string(),
                country_id: "US".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            }
        };

        let phone = |phone_number_id, customer_id, number: &str, is_primary| {
            PhoneNumberInformation {
                phone_number_id,
                customer_id,
                number: number.to_string(),
                phone_number_type_id: 1,
                is_primary,
            }
        };

        Self {
            partners: vec![partner(1, "Don"), partner(2, "Kyla"), partner(3, "Vern")],
            addresses: vec![
                address("9876", "City", "12345", "Scott"),
                address("1234", "Town", "54321", "Polk"),
                address("444", "Metropolis", "23456", "Muscatine"),
            ],
            phones: vec![
                phone(1, 1, "1234567890", true),
                phone(2, 1, "5551231234", false),
                phone(3, 2, "5553214321", true),
            ],
        }
    }

    pub fn into_sources(self) -> PartnerSources {
        PartnerSources {
            partners: Arc::new(StaticSource::new("partners", self.partners)),
            addresses: Arc::new(StaticSource::new("addresses", self.addresses)),
            phones: Arc::new(StaticSource::new("phones", self.phones)),
        }
    }
}

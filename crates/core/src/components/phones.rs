use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::join::GroupJoinExt;
use crate::model::{IndividualPartner, PhoneNumber, PhoneNumberInformation};
use crate::pipeline::EntityComponent;
use crate::source::RecordSource;

/// Enrichment component - attaches each partner's phone numbers
///
/// The primary number is the first one in the group flagged as primary.
pub struct PartnersWithPhones {
    source: Arc<dyn RecordSource<PhoneNumberInformation>>,
}

impl PartnersWithPhones {
    pub fn new(source: Arc<dyn RecordSource<PhoneNumberInformation>>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl EntityComponent<IndividualPartner> for PartnersWithPhones {
    fn name(&self) -> String {
        "PartnersWithPhones".to_string()
    }

    async fn execute(&self, seed: Vec<IndividualPartner>) -> Result<Vec<IndividualPartner>> {
        let phones = self.source.fetch().await?;
        Ok(seed.group_join(phones, |partner, group| {
            let primary = group
                .iter()
                .find(|phone| phone.is_primary)
                .map(|phone| phone.phone_number_id);
            let numbers = group.iter().map(PhoneNumber::from).collect();
            partner.with_phone_numbers(numbers, primary)
        }))
    }
}

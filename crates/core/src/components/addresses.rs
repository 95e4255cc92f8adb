use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::join::GroupJoinExt;
use crate::model::{AddressInformation, IndividualPartner};
use crate::pipeline::EntityComponent;
use crate::source::RecordSource;

/// Enrichment component - attaches each partner's addresses
pub struct PartnersWithAddresses {
    source: Arc<dyn RecordSource<AddressInformation>>,
}

impl PartnersWithAddresses {
    pub fn new(source: Arc<dyn RecordSource<AddressInformation>>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl EntityComponent<IndividualPartner> for PartnersWithAddresses {
    fn name(&self) -> String {
        "PartnersWithAddresses".to_string()
    }

    async fn execute(&self, seed: Vec<IndividualPartner>) -> Result<Vec<IndividualPartner>> {
        let addresses = self.source.fetch().await?;
        Ok(seed.group_join(addresses, |partner, group| {
            partner.with_addresses(group.to_vec())
        }))
    }
}

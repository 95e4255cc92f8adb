use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::model::{IndividualPartner, IndividualPartnerInformation};
use crate::pipeline::EntityComponent;
use crate::source::RecordSource;

/// Source component - originates the partner sequence
pub struct Partners {
    source: Arc<dyn RecordSource<IndividualPartnerInformation>>,
}

impl Partners {
    pub fn new(source: Arc<dyn RecordSource<IndividualPartnerInformation>>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl EntityComponent<IndividualPartner> for Partners {
    fn name(&self) -> String {
        "Partners".to_string()
    }

    async fn execute(&self, seed: Vec<IndividualPartner>) -> Result<Vec<IndividualPartner>> {
        if !seed.is_empty() {
            debug!("Replacing {} seed partners", seed.len());
        }

        let partners = self.source.fetch().await?;
        Ok(partners.into_iter().map(IndividualPartner::from).collect())
    }
}

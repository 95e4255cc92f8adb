//! Backing data sources for pipeline components

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

/// Source of records consumed by a pipeline component
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    fn name(&self) -> String;

    /// Materialize every record the source holds
    async fn fetch(&self) -> Result<Vec<R>>;
}

/// In-memory source that hands out a copy of its records on every fetch
#[derive(Debug, Clone)]
pub struct StaticSource<R> {
    name: String,
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    pub fn new(name: impl Into<String>, records: Vec<R>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

#[async_trait]
impl<R> RecordSource<R> for StaticSource<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<Vec<R>> {
        debug!("Fetching {} records from {}", self.records.len(), self.name);
        Ok(self.records.clone())
    }
}

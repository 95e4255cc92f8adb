// Pipeline core - reduces an ordered list of components over an empty seed

use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Pipeline component trait
///
/// A component receives the sequence built so far and returns the next one.
/// Source components ignore the seed and originate the sequence; enrichment
/// components merge one more data source into it.
#[async_trait]
pub trait EntityComponent<T>: Send + Sync {
    fn name(&self) -> String;

    async fn execute(&self, seed: Vec<T>) -> Result<Vec<T>>;
}

/// Entity builder - orchestrates execution of components
pub struct EntityBuilder<T> {
    name: String,
    components: Vec<Box<dyn EntityComponent<T>>>,
}

impl<T: Send + 'static> EntityBuilder<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn with_components(
        name: impl Into<String>,
        components: Vec<Box<dyn EntityComponent<T>>>,
    ) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }

    pub fn add_component(mut self, component: Box<dyn EntityComponent<T>>) -> Self {
        self.components.push(component);
        self
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component names in execution order
    pub fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name()).collect()
    }

    /// Run every component once, in order, starting from an empty sequence.
    ///
    /// The first failing component aborts the build and its error is
    /// returned as is.
    pub async fn build(&self) -> Result<Vec<T>> {
        let mut entities = Vec::new();
        for component in &self.components {
            let before = entities.len();
            entities = component.execute(entities).await?;
            debug!(
                "[{}] {}: {} -> {} entities",
                self.name,
                component.name(),
                before,
                entities.len()
            );
        }
        Ok(entities)
    }
}

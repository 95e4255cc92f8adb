// Pipeline builder for fluent pipeline construction
use super::core::EntityBuilder;
use super::registry::ComponentRegistry;
use crate::error::{PartnerError, Result};
use std::sync::Arc;

/// Builder for composing an [`EntityBuilder`] from registered components
pub struct PipelineBuilder<T> {
    name: String,
    registry: Arc<ComponentRegistry<T>>,
    component_names: Vec<String>,
}

impl<T: Send + 'static> PipelineBuilder<T> {
    /// Create a new pipeline builder
    pub fn new(name: impl Into<String>, registry: Arc<ComponentRegistry<T>>) -> Self {
        Self {
            name: name.into(),
            registry,
            component_names: Vec::new(),
        }
    }

    /// Add a component by name
    pub fn add_component(mut self, name: impl Into<String>) -> Result<Self> {
        let component_name = name.into();
        self.check_registered(&component_name)?;
        self.component_names.push(component_name);
        Ok(self)
    }

    /// Add multiple components by names
    pub fn add_components<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let component_name = name.into();
            self.check_registered(&component_name)?;
            self.component_names.push(component_name);
        }
        Ok(self)
    }

    /// Build the pipeline
    pub fn build(self) -> Result<EntityBuilder<T>> {
        let mut pipeline = EntityBuilder::new(self.name);
        for name in &self.component_names {
            let component = self.registry.create(name).ok_or_else(|| {
                PartnerError::invalid_config(format!("Component '{}' not found", name))
            })?;
            pipeline = pipeline.add_component(component);
        }
        Ok(pipeline)
    }

    fn check_registered(&self, name: &str) -> Result<()> {
        if self.registry.contains(name) {
            Ok(())
        } else {
            Err(PartnerError::invalid_config(format!(
                "Component '{}' not found in registry",
                name
            )))
        }
    }
}

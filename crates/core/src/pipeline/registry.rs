// Component registry for composing pipelines by name
use super::core::EntityComponent;
use indexmap::IndexMap;

/// Factory function type for creating pipeline components
pub type ComponentFactory<T> = Box<dyn Fn() -> Box<dyn EntityComponent<T>> + Send + Sync>;

/// Registry for pipeline components of one entity type
pub struct ComponentRegistry<T> {
    components: IndexMap<String, ComponentFactory<T>>,
}

impl<T> ComponentRegistry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            components: IndexMap::new(),
        }
    }

    /// Register a component factory with a name
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn EntityComponent<T>> + Send + Sync + 'static,
    {
        self.components.insert(name.into(), Box::new(factory));
    }

    /// Create a component instance by name
    pub fn create(&self, name: &str) -> Option<Box<dyn EntityComponent<T>>> {
        self.components.get(name).map(|factory| factory())
    }

    /// Check if a component is registered
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// List registered component names in registration order
    pub fn list_components(&self) -> Vec<String> {
        self.components.keys().cloned().collect()
    }

    /// Get the number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<T> Default for ComponentRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

use std::{fmt, sync::Arc};

use crate::error::Result;

pub mod map;
pub mod parameter_store;
pub mod system_environment;

pub use map::MapPropertySource;
pub use parameter_store::ParameterStorePropertySource;
pub use system_environment::SystemEnvironmentPropertySource;

/// A named source of configuration values.
#[async_trait::async_trait]
pub trait PropertySource: Send + Sync {
    fn name(&self) -> &str;

    async fn get_property(&self, name: &str) -> Result<Option<String>>;

    async fn contains_property(&self, name: &str) -> Result<bool> {
        Ok(self.get_property(name).await?.is_some())
    }
}

/// Ordered chain of property sources. Lookups walk the chain front to back and
/// the first source holding a value wins.
///
/// Names are unique: adding a source whose name is already registered replaces
/// the previous one.
#[derive(Clone, Default)]
pub struct PropertySources {
    sources: Vec<Arc<dyn PropertySource>>,
}

impl PropertySources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_first(&mut self, source: Arc<dyn PropertySource>) {
        self.remove(source.name());
        self.sources.insert(0, source);
    }

    pub fn add_last(&mut self, source: Arc<dyn PropertySource>) {
        self.remove(source.name());
        self.sources.push(source);
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn PropertySource>> {
        let index = self.sources.iter().position(|s| s.name() == name)?;
        Some(self.sources.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn PropertySource>> {
        self.sources.iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub async fn get_property(&self, name: &str) -> Result<Option<String>> {
        for source in &self.sources {
            if let Some(value) = source.get_property(name).await? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

impl fmt::Debug for PropertySources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

use std::collections::HashMap;

use super::PropertySource;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MapPropertySource {
    name: String,
    properties: HashMap<String, String>,
}

impl MapPropertySource {
    pub fn new(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            name,
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }
}

#[async_trait::async_trait]
impl PropertySource for MapPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_property(&self, name: &str) -> Result<Option<String>> {
        Ok(self.properties.get(name).cloned())
    }
}

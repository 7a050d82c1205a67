use super::PropertySource;
use crate::{error::Result, source::ParameterStoreSource};

pub const PARAMETER_STORE_PROPERTY_SOURCE_NAME: &str = "AWSParameterStorePropertySource";

/// Only names with this prefix are looked up remotely.
pub const PARAMETER_STORE_PROPERTY_PREFIX: &str = "/";

#[derive(Debug, Clone)]
pub struct ParameterStorePropertySource {
    name: String,
    source: ParameterStoreSource,
}

impl ParameterStorePropertySource {
    pub fn new(name: impl Into<String>, source: ParameterStoreSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    pub fn for_region(region: &str, source: ParameterStoreSource) -> Self {
        Self::new(
            format!("{}_{}", PARAMETER_STORE_PROPERTY_SOURCE_NAME, region),
            source,
        )
    }

    pub fn source(&self) -> &ParameterStoreSource {
        &self.source
    }
}

#[async_trait::async_trait]
impl PropertySource for ParameterStorePropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_property(&self, name: &str) -> Result<Option<String>> {
        if !name.starts_with(PARAMETER_STORE_PROPERTY_PREFIX) {
            return Ok(None);
        }
        Ok(self.source.get_property(name).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::LocalSsmClient;

    #[tokio::test]
    async fn test_delegates_prefixed_names() {
        let client = Arc::new(LocalSsmClient::with_parameters([("/app/key", "value")]));
        let property_source = ParameterStorePropertySource::new(
            PARAMETER_STORE_PROPERTY_SOURCE_NAME,
            ParameterStoreSource::new(client.clone(), false),
        );

        assert_eq!(
            property_source.get_property("/app/key").await.unwrap().as_deref(),
            Some("value")
        );
        assert_eq!(property_source.get_property("/app/other").await.unwrap(), None);
        assert_eq!(client.request_count(), 2);
    }

    #[tokio::test]
    async fn test_ignores_names_without_prefix() {
        let client = Arc::new(LocalSsmClient::with_parameters([("app.key", "value")]));
        let property_source = ParameterStorePropertySource::new(
            PARAMETER_STORE_PROPERTY_SOURCE_NAME,
            ParameterStoreSource::new(client.clone(), true),
        );

        assert_eq!(property_source.get_property("app.key").await.unwrap(), None);
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let client = Arc::new(LocalSsmClient::new());
        let property_source = ParameterStorePropertySource::new(
            PARAMETER_STORE_PROPERTY_SOURCE_NAME,
            ParameterStoreSource::new(client, true),
        );

        let err = property_source.get_property("/missing").await.unwrap_err();
        assert!(err.is_parameter_not_found());
    }

    #[test]
    fn test_regional_name() {
        let source = ParameterStoreSource::new(Arc::new(LocalSsmClient::new()), false);
        let property_source = ParameterStorePropertySource::for_region("us-east-1", source);

        assert_eq!(property_source.name(), "AWSParameterStorePropertySource_us-east-1");
    }
}

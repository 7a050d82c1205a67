use super::{Configs, HALT_BOOT, SSM_CLIENT_CUSTOM_ENDPOINT, SSM_CLIENT_SIGNING_REGION};
use crate::{client::ClientSettings, environment::Environment, error::Result};

/// Settings of the single-region strategy. Without a custom endpoint the
/// client uses the ambient AWS region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub halt_boot: bool,
    pub settings: ClientSettings,
}

#[async_trait::async_trait]
impl Configs for ClientConfig {
    async fn load(environment: &dyn Environment) -> Result<Self> {
        let halt_boot = environment.get_bool(HALT_BOOT, false).await?;

        let endpoint_url = environment
            .get_property(SSM_CLIENT_CUSTOM_ENDPOINT)
            .await?
            .filter(|e| !e.trim().is_empty());
        let settings = match endpoint_url {
            Some(endpoint_url) => ClientSettings {
                region: environment
                    .get_property(SSM_CLIENT_SIGNING_REGION)
                    .await?
                    .filter(|r| !r.trim().is_empty()),
                endpoint_url: Some(endpoint_url),
            },
            None => ClientSettings::default(),
        };

        Ok(ClientConfig {
            halt_boot,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{environment::StandardEnvironment, property_source::MapPropertySource};

    fn environment(pairs: &[(&str, &str)]) -> StandardEnvironment {
        StandardEnvironment::new()
            .with_source(MapPropertySource::from_pairs("test", pairs.iter().copied()))
    }

    #[tokio::test]
    async fn test_defaults_to_ambient_client() {
        let config = ClientConfig::load(&environment(&[])).await.unwrap();

        assert!(!config.halt_boot);
        assert_eq!(config.settings, ClientSettings::default());
    }

    #[tokio::test]
    async fn test_custom_endpoint_with_signing_region() {
        let env = environment(&[
            (HALT_BOOT, "true"),
            (SSM_CLIENT_CUSTOM_ENDPOINT, "http://localhost:4566"),
            (SSM_CLIENT_SIGNING_REGION, "us-east-2"),
        ]);

        let config = ClientConfig::load(&env).await.unwrap();

        assert!(config.halt_boot);
        assert_eq!(
            config.settings,
            ClientSettings {
                region: Some("us-east-2".to_string()),
                endpoint_url: Some("http://localhost:4566".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_signing_region_ignored_without_endpoint() {
        let env = environment(&[(SSM_CLIENT_SIGNING_REGION, "us-east-2")]);

        let config = ClientConfig::load(&env).await.unwrap();

        assert_eq!(config.settings, ClientSettings::default());
    }
}

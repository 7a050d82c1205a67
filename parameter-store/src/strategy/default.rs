use std::sync::Arc;

use tracing::info;

use crate::{
    client::SsmClientFactory,
    configs::{ClientConfig, Configs},
    environment::Environment,
    error::Result,
    property_source::{
        ParameterStorePropertySource, parameter_store::PARAMETER_STORE_PROPERTY_SOURCE_NAME,
    },
    source::ParameterStoreSource,
};

pub async fn post_process(
    environment: &mut dyn Environment,
    client_factory: &dyn SsmClientFactory,
) -> Result<()> {
    let config = ClientConfig::load(environment).await?;
    let client = client_factory.create(&config.settings).await;

    let property_source = ParameterStorePropertySource::new(
        PARAMETER_STORE_PROPERTY_SOURCE_NAME,
        ParameterStoreSource::new(client, config.halt_boot),
    );

    info!(
        source = PARAMETER_STORE_PROPERTY_SOURCE_NAME,
        halt_boot = config.halt_boot,
        "Registering parameter store property source"
    );
    environment
        .property_sources_mut()
        .add_first(Arc::new(property_source));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::{ClientSettings, LocalSsmClient, LocalSsmClientFactory},
        configs::{HALT_BOOT, SSM_CLIENT_CUSTOM_ENDPOINT, SSM_CLIENT_SIGNING_REGION},
        environment::StandardEnvironment,
        property_source::MapPropertySource,
    };

    #[tokio::test]
    async fn test_registers_single_source_first() {
        let client = Arc::new(LocalSsmClient::with_parameters([("/app/key", "remote")]));
        let factory = LocalSsmClientFactory::new(client.clone());
        let mut env = StandardEnvironment::new().with_source(MapPropertySource::from_pairs(
            "application",
            [("/app/key", "local")],
        ));

        post_process(&mut env, &factory).await.unwrap();

        assert_eq!(
            env.property_sources().names(),
            vec![PARAMETER_STORE_PROPERTY_SOURCE_NAME, "application"]
        );
        assert_eq!(factory.created(), vec![ClientSettings::default()]);
        assert_eq!(
            env.get_property("/app/key").await.unwrap().as_deref(),
            Some("remote")
        );
    }

    #[tokio::test]
    async fn test_halt_boot_is_applied() {
        let factory = LocalSsmClientFactory::default();
        let mut env = StandardEnvironment::new()
            .with_source(MapPropertySource::from_pairs("application", [(HALT_BOOT, "true")]));

        post_process(&mut env, &factory).await.unwrap();

        let err = env.get_property("/missing").await.unwrap_err();
        assert!(err.is_parameter_not_found());
    }

    #[tokio::test]
    async fn test_custom_endpoint_settings_reach_factory() {
        let factory = LocalSsmClientFactory::default();
        let mut env = StandardEnvironment::new().with_source(MapPropertySource::from_pairs(
            "application",
            [
                (SSM_CLIENT_CUSTOM_ENDPOINT, "http://localhost:4566"),
                (SSM_CLIENT_SIGNING_REGION, "ca-central-1"),
            ],
        ));

        post_process(&mut env, &factory).await.unwrap();

        assert_eq!(
            factory.created(),
            vec![ClientSettings {
                region: Some("ca-central-1".to_string()),
                endpoint_url: Some("http://localhost:4566".to_string()),
            }]
        );
    }
}

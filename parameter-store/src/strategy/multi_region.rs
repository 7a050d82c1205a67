use std::sync::Arc;

use tracing::info;

use crate::{
    client::{ClientSettings, SsmClientFactory},
    configs::{Configs, MultiRegionConfig},
    environment::Environment,
    error::Result,
    property_source::{ParameterStorePropertySource, PropertySource},
    source::ParameterStoreSource,
};

pub async fn post_process(
    environment: &mut dyn Environment,
    client_factory: &dyn SsmClientFactory,
) -> Result<()> {
    let config = MultiRegionConfig::load(environment).await?;

    for property_source in build_property_sources(&config, client_factory).await {
        info!(
            source = property_source.name(),
            halt_boot = property_source.source().halt_boot(),
            "Registering parameter store property source"
        );
        environment
            .property_sources_mut()
            .add_first(Arc::new(property_source));
    }

    Ok(())
}

/// Builds one source per region, last region first, so that adding each to
/// the front of the chain leaves them in the configured precedence order.
/// Only the source of the last region may halt boot.
pub async fn build_property_sources(
    config: &MultiRegionConfig,
    client_factory: &dyn SsmClientFactory,
) -> Vec<ParameterStorePropertySource> {
    let last_index = config.regions.len().saturating_sub(1);
    let mut property_sources = Vec::with_capacity(config.regions.len());

    for (index, region) in config.regions.iter().enumerate().rev() {
        let halt_boot = index == last_index && config.halt_boot;
        let client = client_factory
            .create(&ClientSettings::for_region(region.as_str()))
            .await;
        property_sources.push(ParameterStorePropertySource::for_region(
            region,
            ParameterStoreSource::new(client, halt_boot),
        ));
    }

    property_sources
}

pub mod activation;
pub mod client;
pub mod multi_region;

pub use activation::ActivationConfig;
pub use client::ClientConfig;
pub use multi_region::MultiRegionConfig;

use crate::{environment::Environment, error::Result};

pub const ENABLED: &str = "awsParameterStorePropertySource.enabled";
pub const ACCEPTED_PROFILE: &str = "awsParameterStorePropertySourceEnabled";
pub const ACCEPTED_PROFILES: &str = "awsParameterStorePropertySource.enabledProfiles";
pub const SUPPORT_MULTIPLE_APPLICATION_CONTEXTS: &str =
    "awsParameterStorePropertySource.supportMultipleApplicationContexts";
pub const HALT_BOOT: &str = "awsParameterStoreSource.haltBoot";
pub const SSM_CLIENT_CUSTOM_ENDPOINT: &str =
    "awsParameterStoreSource.ssmClient.endpointConfiguration.endpoint";
pub const SSM_CLIENT_SIGNING_REGION: &str =
    "awsParameterStoreSource.ssmClient.endpointConfiguration.signingRegion";
pub const SSM_CLIENT_SIGNING_REGIONS: &str =
    "awsParameterStoreSource.multiRegion.ssmClient.regions";

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load(environment: &dyn Environment) -> Result<Self>;
}

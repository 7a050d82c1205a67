use std::collections::HashSet;

use super::{Configs, HALT_BOOT, SSM_CLIENT_SIGNING_REGIONS};
use crate::{
    environment::Environment,
    error::{Error, Result},
};

/// Settings of the multi-region strategy. `regions` is never empty and lists
/// regions in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiRegionConfig {
    pub halt_boot: bool,
    pub regions: Vec<String>,
}

#[async_trait::async_trait]
impl Configs for MultiRegionConfig {
    async fn load(environment: &dyn Environment) -> Result<Self> {
        let regions = environment
            .get_list(SSM_CLIENT_SIGNING_REGIONS)
            .await?
            .unwrap_or_default();
        if regions.is_empty() {
            return Err(Error::MissingSigningRegions {
                key: SSM_CLIENT_SIGNING_REGIONS.to_string(),
            });
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = regions.iter().find(|r| !seen.insert(r.as_str())) {
            return Err(Error::invalid_property(
                SSM_CLIENT_SIGNING_REGIONS,
                regions.join(","),
                format!("region '{}' is listed more than once", duplicate),
            ));
        }

        Ok(MultiRegionConfig {
            halt_boot: environment.get_bool(HALT_BOOT, false).await?,
            regions,
        })
    }
}

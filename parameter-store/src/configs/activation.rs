use super::{ACCEPTED_PROFILES, Configs, ENABLED};
use crate::{environment::Environment, error::Result};

/// Flags deciding whether the post-processor registers anything. Only read
/// once the re-invocation guard has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationConfig {
    pub enabled: bool,
    /// `None` when not configured, `Some(vec![])` when configured but blank.
    pub accepted_profiles: Option<Vec<String>>,
}

#[async_trait::async_trait]
impl Configs for ActivationConfig {
    async fn load(environment: &dyn Environment) -> Result<Self> {
        Ok(ActivationConfig {
            enabled: environment.get_bool(ENABLED, false).await?,
            accepted_profiles: environment.get_list(ACCEPTED_PROFILES).await?,
        })
    }
}

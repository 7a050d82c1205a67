use std::{fmt, sync::Arc};

use tracing::{debug, info};

use crate::{
    client::SsmClientFactory,
    configs::{
        ACCEPTED_PROFILE, ActivationConfig, Configs, SSM_CLIENT_SIGNING_REGIONS,
        SUPPORT_MULTIPLE_APPLICATION_CONTEXTS,
    },
    environment::Environment,
    error::Result,
    strategy::PostProcessStrategy,
};

/// Tracks whether parameter store sources were already registered during the
/// lifetime of the host process.
#[derive(Debug, Default)]
pub struct BootstrapContext {
    initialized: bool,
}

impl BootstrapContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn reset(&mut self) {
        self.initialized = false;
    }
}

/// Entry point run while bootstrapping an application's environment.
///
/// Registration happens when `awsParameterStorePropertySource.enabled` is set
/// or when one of the accepted profiles is active. Errors raised while
/// registering, or later while resolving with halt-boot, are never swallowed.
pub struct ParameterStorePostProcessor {
    client_factory: Arc<dyn SsmClientFactory>,
}

impl ParameterStorePostProcessor {
    pub fn new(client_factory: Arc<dyn SsmClientFactory>) -> Self {
        Self { client_factory }
    }

    pub async fn post_process_environment(
        &self,
        context: &mut BootstrapContext,
        environment: &mut dyn Environment,
    ) -> Result<()> {
        if context.is_initialized()
            && !environment
                .get_bool(SUPPORT_MULTIPLE_APPLICATION_CONTEXTS, false)
                .await?
        {
            debug!("Parameter store property sources already registered, skipping");
            return Ok(());
        }

        let activation = ActivationConfig::load(environment).await?;

        if !activation.enabled && !is_profile_active(&activation, environment) {
            debug!("Parameter store property source is disabled");
            return Ok(());
        }

        context.initialized = true;

        let strategy = select_strategy(environment).await?;
        info!(strategy = %strategy, "Registering parameter store property sources");

        strategy
            .post_process(environment, self.client_factory.as_ref())
            .await
    }
}

impl fmt::Debug for ParameterStorePostProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterStorePostProcessor").finish_non_exhaustive()
    }
}

/// A blank accepted-profiles override disables profile activation entirely.
fn is_profile_active(activation: &ActivationConfig, environment: &dyn Environment) -> bool {
    match &activation.accepted_profiles {
        Some(profiles) if profiles.is_empty() => false,
        Some(profiles) => environment.accepts_profiles(profiles),
        None => environment.accepts_profiles(&[ACCEPTED_PROFILE.to_string()]),
    }
}

async fn select_strategy(environment: &dyn Environment) -> Result<PostProcessStrategy> {
    let has_regions = environment
        .get_list(SSM_CLIENT_SIGNING_REGIONS)
        .await?
        .is_some_and(|regions| !regions.is_empty());

    Ok(if has_regions {
        PostProcessStrategy::MultiRegion
    } else {
        PostProcessStrategy::Default
    })
}

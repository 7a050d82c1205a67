use std::{fmt, str::FromStr};

use crate::{
    client::SsmClientFactory,
    environment::Environment,
    error::{Error, Result},
};

pub mod default;
pub mod multi_region;

pub const DEFAULT_STRATEGY: &str = "DEFAULT";
pub const MULTI_REGION_STRATEGY: &str = "MULTI_REGION";

/// How parameter store property sources are registered into an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcessStrategy {
    /// One source using the ambient (or custom endpoint) client.
    Default,
    /// One source per configured signing region, in precedence order.
    MultiRegion,
}

impl PostProcessStrategy {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => DEFAULT_STRATEGY,
            Self::MultiRegion => MULTI_REGION_STRATEGY,
        }
    }

    pub async fn post_process(
        &self,
        environment: &mut dyn Environment,
        client_factory: &dyn SsmClientFactory,
    ) -> Result<()> {
        match self {
            Self::Default => default::post_process(environment, client_factory).await,
            Self::MultiRegion => multi_region::post_process(environment, client_factory).await,
        }
    }
}

impl fmt::Display for PostProcessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for PostProcessStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            DEFAULT_STRATEGY => Ok(Self::Default),
            MULTI_REGION_STRATEGY => Ok(Self::MultiRegion),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for strategy in [PostProcessStrategy::Default, PostProcessStrategy::MultiRegion] {
            assert_eq!(strategy.key().parse::<PostProcessStrategy>().unwrap(), strategy);
        }
        assert_eq!(PostProcessStrategy::MultiRegion.to_string(), "MULTI_REGION");
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = "SOMETHING_ELSE".parse::<PostProcessStrategy>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(key) if key == "SOMETHING_ELSE"));
    }
}

use std::env;

use super::PropertySource;
use crate::error::Result;

pub const SYSTEM_ENVIRONMENT_PROPERTY_SOURCE_NAME: &str = "systemEnvironment";

/// Process environment variables. A key such as `a.b-c` is looked up as
/// `a.b-c`, then `a_b_c`, then `A_B_C`.
#[derive(Debug, Clone)]
pub struct SystemEnvironmentPropertySource {
    name: String,
}

impl SystemEnvironmentPropertySource {
    pub fn new() -> Self {
        Self::with_name(SYSTEM_ENVIRONMENT_PROPERTY_SOURCE_NAME)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn candidates(key: &str) -> [String; 3] {
        let underscored = key.replace(['.', '-'], "_");
        let upper = underscored.to_uppercase();
        [key.to_string(), underscored, upper]
    }
}

impl Default for SystemEnvironmentPropertySource {
    fn default() -> Self {
        Self::new()
    }
}

pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok()
}

#[async_trait::async_trait]
impl PropertySource for SystemEnvironmentPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_property(&self, name: &str) -> Result<Option<String>> {
        Ok(Self::candidates(name)
            .iter()
            .find_map(|candidate| optional_env(candidate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_exact_name() {
        unsafe {
            std::env::set_var("plain_test_var", "value");
        }

        let source = SystemEnvironmentPropertySource::new();
        assert_eq!(
            source.get_property("plain_test_var").await.unwrap().as_deref(),
            Some("value")
        );

        unsafe {
            std::env::remove_var("plain_test_var");
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_relaxed_name() {
        unsafe {
            std::env::set_var("AWSPARAMETERSTORESOURCE_HALTBOOT", "true");
        }

        let source = SystemEnvironmentPropertySource::new();
        assert_eq!(
            source
                .get_property("awsParameterStoreSource.haltBoot")
                .await
                .unwrap()
                .as_deref(),
            Some("true")
        );

        unsafe {
            std::env::remove_var("AWSPARAMETERSTORESOURCE_HALTBOOT");
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_missing() {
        unsafe {
            std::env::remove_var("MISSING_PROPERTY_SOURCE_VAR");
        }

        let source = SystemEnvironmentPropertySource::new();
        assert_eq!(
            source.get_property("missing.property-source.var").await.unwrap(),
            None
        );
    }

    #[test]
    fn test_candidates() {
        assert_eq!(
            SystemEnvironmentPropertySource::candidates("a.b-c"),
            ["a.b-c".to_string(), "a_b_c".to_string(), "A_B_C".to_string()]
        );
    }
}

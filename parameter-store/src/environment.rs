use std::sync::Arc;

use crate::{
    error::{Error, Result},
    property_source::{PropertySource, PropertySources},
};

pub const DEFAULT_PROFILE: &str = "default";

/// The configuration-resolution environment the post-processor reads its
/// flags from and registers its property sources into.
#[async_trait::async_trait]
pub trait Environment: Send + Sync {
    fn property_sources(&self) -> &PropertySources;

    fn property_sources_mut(&mut self) -> &mut PropertySources;

    fn active_profiles(&self) -> &[String];

    fn default_profiles(&self) -> &[String];

    /// True when at least one of `profiles` is active. `!name` matches when
    /// `name` is not active.
    fn accepts_profiles(&self, profiles: &[String]) -> bool {
        profiles.iter().any(|profile| match profile.strip_prefix('!') {
            Some(negated) => !is_profile_active(self, negated),
            None => is_profile_active(self, profile),
        })
    }

    async fn get_property(&self, key: &str) -> Result<Option<String>> {
        self.property_sources().get_property(key).await
    }

    async fn contains_property(&self, key: &str) -> Result<bool> {
        Ok(self.get_property(key).await?.is_some())
    }

    async fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.get_property(key).await? {
            None => Ok(default),
            Some(value) => parse_bool(key, &value),
        }
    }

    /// Comma separated list. A key that is present but blank yields an empty
    /// list rather than `None`.
    async fn get_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.get_property(key).await?.map(|value| split_list(&value)))
    }
}

fn is_profile_active<E: Environment + ?Sized>(environment: &E, profile: &str) -> bool {
    let active = environment.active_profiles();
    if active.is_empty() {
        environment.default_profiles().iter().any(|p| p == profile)
    } else {
        active.iter().any(|p| p == profile)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_property(key, value, "expected 'true' or 'false'")),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone)]
pub struct StandardEnvironment {
    property_sources: PropertySources,
    active_profiles: Vec<String>,
    default_profiles: Vec<String>,
}

impl StandardEnvironment {
    pub fn new() -> Self {
        Self {
            property_sources: PropertySources::new(),
            active_profiles: Vec::new(),
            default_profiles: vec![DEFAULT_PROFILE.to_string()],
        }
    }

    pub fn with_source(mut self, source: impl PropertySource + 'static) -> Self {
        self.property_sources.add_last(Arc::new(source));
        self
    }

    pub fn with_active_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_profiles = profiles.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_active_profile(&mut self, profile: impl Into<String>) {
        self.active_profiles.push(profile.into());
    }

    pub fn set_default_profiles<I, S>(&mut self, profiles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_profiles = profiles.into_iter().map(Into::into).collect();
    }
}

impl Default for StandardEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for StandardEnvironment {
    fn property_sources(&self) -> &PropertySources {
        &self.property_sources
    }

    fn property_sources_mut(&mut self) -> &mut PropertySources {
        &mut self.property_sources
    }

    fn active_profiles(&self) -> &[String] {
        &self.active_profiles
    }

    fn default_profiles(&self) -> &[String] {
        &self.default_profiles
    }
}

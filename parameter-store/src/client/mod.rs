use std::{fmt, sync::Arc};

use crate::error::BoxError;

pub mod aws;
pub mod local;

pub use aws::{AwsSsmClient, AwsSsmClientFactory};
pub use local::{LocalSsmClient, LocalSsmClientFactory};

pub const HTTP_STATUS_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRequest {
    pub name: String,
    pub with_decryption: bool,
}

impl ParameterRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            with_decryption: false,
        }
    }

    pub fn with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = with_decryption;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterResponse {
    pub status_code: u16,
    pub parameter: Option<Parameter>,
}

impl ParameterResponse {
    /// Response stamped with status 200. The AWS client uses this for every
    /// output, so a status other than 200 only comes from other clients.
    pub fn ok(parameter: Option<Parameter>) -> Self {
        Self {
            status_code: HTTP_STATUS_OK,
            parameter,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.parameter.as_ref().and_then(|p| p.value.as_deref())
    }
}

#[derive(Debug)]
pub enum ClientError {
    ParameterNotFound,
    Service(BoxError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterNotFound => write!(f, "Parameter not found"),
            Self::Service(err) => write!(f, "Service error: {}", err),
        }
    }
}

impl std::error::Error for ClientError {}

/// Remote key-value lookup used by [`crate::source::ParameterStoreSource`].
#[async_trait::async_trait]
pub trait SsmClient: Send + Sync {
    async fn get_parameter(
        &self,
        request: ParameterRequest,
    ) -> Result<ParameterResponse, ClientError>;
}

/// Where a client should send its requests. `None` fields fall back to the
/// ambient AWS configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl ClientSettings {
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            endpoint_url: None,
        }
    }
}

#[async_trait::async_trait]
pub trait SsmClientFactory: Send + Sync {
    async fn create(&self, settings: &ClientSettings) -> Arc<dyn SsmClient>;
}

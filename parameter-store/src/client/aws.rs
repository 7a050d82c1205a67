use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_sdk_ssm::{Client, operation::get_parameter::GetParameterError};
use aws_types::region::Region;
use tracing::debug;

use super::{
    ClientError, ClientSettings, Parameter, ParameterRequest, ParameterResponse, SsmClient,
    SsmClientFactory,
};

#[derive(Clone)]
pub struct AwsSsmClient {
    client: Client,
}

impl AwsSsmClient {
    pub async fn new(settings: &ClientSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = settings.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;
        Self::with_client(Client::new(&shared_config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for AwsSsmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSsmClient")
            .field("region", &self.client.config().region())
            .finish()
    }
}

#[async_trait::async_trait]
impl SsmClient for AwsSsmClient {
    async fn get_parameter(
        &self,
        request: ParameterRequest,
    ) -> Result<ParameterResponse, ClientError> {
        debug!(parameter = request.name.as_str(), "Getting parameter from SSM");

        let result = self
            .client
            .get_parameter()
            .name(&request.name)
            .with_decryption(request.with_decryption)
            .send()
            .await;

        match result {
            // The SDK only yields an output for a successful HTTP exchange.
            Ok(output) => Ok(ParameterResponse::ok(output.parameter().map(|p| Parameter {
                name: p.name().map(str::to_string),
                value: p.value().map(str::to_string),
            }))),
            Err(err) => Err(map_error(err.into_service_error())),
        }
    }
}

fn map_error(err: GetParameterError) -> ClientError {
    match err {
        GetParameterError::ParameterNotFound(_) => ClientError::ParameterNotFound,
        other => ClientError::Service(Box::new(other)),
    }
}

#[derive(Debug, Clone, Default)]
pub struct AwsSsmClientFactory;

impl AwsSsmClientFactory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SsmClientFactory for AwsSsmClientFactory {
    async fn create(&self, settings: &ClientSettings) -> Arc<dyn SsmClient> {
        debug!(
            region = settings.region.as_deref().unwrap_or("<default>"),
            endpoint = settings.endpoint_url.as_deref().unwrap_or("<default>"),
            "Creating SSM client"
        );
        Arc::new(AwsSsmClient::new(settings).await)
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_ssm::types::error::{InternalServerError, ParameterNotFound};

    use super::*;

    #[test]
    fn test_parameter_not_found_maps_to_not_found() {
        let err = GetParameterError::ParameterNotFound(ParameterNotFound::builder().build());

        assert!(matches!(map_error(err), ClientError::ParameterNotFound));
    }

    #[test]
    fn test_other_errors_map_to_service() {
        let err = GetParameterError::InternalServerError(
            InternalServerError::builder()
                .message("service unavailable")
                .build(),
        );

        match map_error(err) {
            ClientError::Service(source) => {
                assert!(source.to_string().contains("InternalServerError"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

use std::{fmt, sync::Arc};

use tracing::{debug, warn};

use crate::{
    client::{ClientError, HTTP_STATUS_OK, ParameterRequest, ParameterResponse, SsmClient},
    error::ParameterStoreError,
};

/// Resolves single parameters against the remote store.
///
/// A missing parameter resolves to `None` unless the source halts boot, in
/// which case it is reported as [`ParameterStoreError::ParameterNotFound`].
/// Every other failure is an error regardless of `halt_boot`.
#[derive(Clone)]
pub struct ParameterStoreSource {
    client: Arc<dyn SsmClient>,
    halt_boot: bool,
}

impl ParameterStoreSource {
    pub fn new(client: Arc<dyn SsmClient>, halt_boot: bool) -> Self {
        Self { client, halt_boot }
    }

    pub fn halt_boot(&self) -> bool {
        self.halt_boot
    }

    pub async fn get_property(&self, name: &str) -> Result<Option<String>, ParameterStoreError> {
        let request = ParameterRequest::new(name).with_decryption(true);

        match self.client.get_parameter(request).await {
            Ok(response) => Self::extract_value(name, response).map(Some),
            Err(ClientError::ParameterNotFound) => {
                if self.halt_boot {
                    warn!(parameter = name, "Parameter not found and halt boot is enabled");
                    Err(ParameterStoreError::ParameterNotFound {
                        name: name.to_string(),
                    })
                } else {
                    debug!(parameter = name, "Parameter not found");
                    Ok(None)
                }
            }
            Err(ClientError::Service(source)) => Err(ParameterStoreError::Service {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn extract_value(
        name: &str,
        response: ParameterResponse,
    ) -> Result<String, ParameterStoreError> {
        if response.status_code != HTTP_STATUS_OK {
            warn!(
                parameter = name,
                status_code = response.status_code,
                "Unexpected status code from parameter store"
            );
            return Err(ParameterStoreError::UnexpectedStatus {
                name: name.to_string(),
                status_code: response.status_code,
            });
        }

        response
            .parameter
            .and_then(|p| p.value)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ParameterStoreError::MissingValue {
                name: name.to_string(),
            })
    }
}

impl fmt::Debug for ParameterStoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterStoreSource")
            .field("halt_boot", &self.halt_boot)
            .finish()
    }
}

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use super::{
    ClientError, ClientSettings, HTTP_STATUS_OK, Parameter, ParameterRequest, ParameterResponse,
    SsmClient, SsmClientFactory,
};

#[derive(Debug, Clone)]
enum Entry {
    Value(String),
    NoValue,
    NoParameter,
    Failure(String),
}

/// In-memory parameter store. Every request is recorded so callers can check
/// how often the remote side would have been contacted.
#[derive(Debug)]
pub struct LocalSsmClient {
    entries: RwLock<HashMap<String, Entry>>,
    status_code: RwLock<u16>,
    requests: Mutex<Vec<ParameterRequest>>,
}

impl LocalSsmClient {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            status_code: RwLock::new(HTTP_STATUS_OK),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_parameters<I, K, V>(parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let client = Self::new();
        for (name, value) in parameters {
            client.put_parameter(name, value);
        }
        client
    }

    pub fn put_parameter(&self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name.into(), Entry::Value(value.into()));
    }

    /// The parameter exists but the response carries no value.
    pub fn put_parameter_without_value(&self, name: impl Into<String>) {
        self.insert(name.into(), Entry::NoValue);
    }

    /// The response for this name carries no parameter at all.
    pub fn put_empty_response(&self, name: impl Into<String>) {
        self.insert(name.into(), Entry::NoParameter);
    }

    pub fn put_failure(&self, name: impl Into<String>, message: impl Into<String>) {
        self.insert(name.into(), Entry::Failure(message.into()));
    }

    /// Status code reported on every successful response from now on.
    pub fn set_status_code(&self, status_code: u16) {
        *self
            .status_code
            .write()
            .unwrap_or_else(PoisonError::into_inner) = status_code;
    }

    pub fn requests(&self) -> Vec<ParameterRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn insert(&self, name: String, entry: Entry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, entry);
    }
}

impl Default for LocalSsmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SsmClient for LocalSsmClient {
    async fn get_parameter(
        &self,
        request: ParameterRequest,
    ) -> Result<ParameterResponse, ClientError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let entry = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&request.name)
            .cloned();
        let status_code = *self
            .status_code
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let parameter = match entry {
            None => return Err(ClientError::ParameterNotFound),
            Some(Entry::Failure(message)) => return Err(ClientError::Service(message.into())),
            Some(Entry::NoParameter) => None,
            Some(Entry::NoValue) => Some(Parameter {
                name: Some(request.name),
                value: None,
            }),
            Some(Entry::Value(value)) => Some(Parameter {
                name: Some(request.name),
                value: Some(value),
            }),
        };

        Ok(ParameterResponse {
            status_code,
            parameter,
        })
    }
}

/// Hands out [`LocalSsmClient`]s, one per region when registered, and records
/// every set of settings it was asked to build a client for.
#[derive(Debug)]
pub struct LocalSsmClientFactory {
    default_client: Arc<LocalSsmClient>,
    regional_clients: HashMap<String, Arc<LocalSsmClient>>,
    created: Mutex<Vec<ClientSettings>>,
}

impl LocalSsmClientFactory {
    pub fn new(default_client: Arc<LocalSsmClient>) -> Self {
        Self {
            default_client,
            regional_clients: HashMap::new(),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>, client: Arc<LocalSsmClient>) -> Self {
        self.regional_clients.insert(region.into(), client);
        self
    }

    pub fn created(&self) -> Vec<ClientSettings> {
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn created_count(&self) -> usize {
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn client_for(&self, settings: &ClientSettings) -> Arc<LocalSsmClient> {
        settings
            .region
            .as_ref()
            .and_then(|region| self.regional_clients.get(region))
            .unwrap_or(&self.default_client)
            .clone()
    }
}

impl Default for LocalSsmClientFactory {
    fn default() -> Self {
        Self::new(Arc::new(LocalSsmClient::new()))
    }
}

#[async_trait::async_trait]
impl SsmClientFactory for LocalSsmClientFactory {
    async fn create(&self, settings: &ClientSettings) -> Arc<dyn SsmClient> {
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(settings.clone());
        self.client_for(settings)
    }
}

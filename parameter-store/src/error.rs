use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure while resolving a parameter from the remote parameter store.
#[derive(Debug, Error)]
pub enum ParameterStoreError {
    /// Raised only by sources configured to halt boot.
    #[error("Parameter '{name}' was not found in the parameter store")]
    ParameterNotFound { name: String },

    #[error("Failed to get parameter '{name}': {source}")]
    Service {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("Unexpected status code {status_code} while getting parameter '{name}'")]
    UnexpectedStatus { name: String, status_code: u16 },

    #[error("Parameter '{name}' has no value")]
    MissingValue { name: String },
}

impl ParameterStoreError {
    pub fn is_parameter_not_found(&self) -> bool {
        matches!(self, Self::ParameterNotFound { .. })
    }

    pub fn parameter_name(&self) -> &str {
        match self {
            Self::ParameterNotFound { name }
            | Self::Service { name, .. }
            | Self::UnexpectedStatus { name, .. }
            | Self::MissingValue { name } => name,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ParameterStore(#[from] ParameterStoreError),

    #[error("Invalid value '{value}' for property '{key}': {reason}")]
    InvalidProperty {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Property '{key}' must list at least one signing region")]
    MissingSigningRegions { key: String },

    #[error("Unknown post-process strategy '{0}'")]
    UnknownStrategy(String),
}

impl Error {
    pub fn invalid_property(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidProperty {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error originated from a missing parameter under halt-boot.
    pub fn is_parameter_not_found(&self) -> bool {
        matches!(self, Self::ParameterStore(e) if e.is_parameter_not_found())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

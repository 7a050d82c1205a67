//! Registers AWS Systems Manager Parameter Store as a property source of an
//! application's layered configuration during bootstrap.
//!
//! Names starting with `/` are resolved remotely, every other name falls
//! through to the next source of the chain.

pub mod client;
pub mod configs;
pub mod environment;
pub mod error;
pub mod processor;
pub mod property_source;
pub mod source;
pub mod strategy;

pub use environment::{Environment, StandardEnvironment};
pub use error::{Error, ParameterStoreError, Result};
pub use processor::{BootstrapContext, ParameterStorePostProcessor};
pub use property_source::{PropertySource, PropertySources};
pub use source::ParameterStoreSource;
pub use strategy::PostProcessStrategy;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use parameter_store::{
    BootstrapContext, Environment, ParameterStorePostProcessor, StandardEnvironment,
    client::AwsSsmClientFactory,
    property_source::{MapPropertySource, SystemEnvironmentPropertySource},
};
use serde_derive::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const COMMAND_LINE_PROPERTY_SOURCE_NAME: &str = "commandLineArgs";

/// Bootstraps a configuration environment with the parameter store property
/// source and resolves the given keys through it.
#[derive(Debug, Parser)]
#[command(name = "parameter-store-resolve", version)]
struct Args {
    /// Keys to resolve. Keys starting with `/` are looked up in the parameter store.
    #[arg(required = true)]
    keys: Vec<String>,

    /// Active profiles
    #[arg(long = "profile", env = "ACTIVE_PROFILES", value_delimiter = ',')]
    profiles: Vec<String>,

    /// Property overrides taking precedence over the process environment, e.g.
    /// `--set awsParameterStorePropertySource.enabled=true`
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,

    /// Print the resolved values as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ResolvedProperty<'a> {
    key: &'a str,
    value: Option<String>,
}

fn parse_key_value(input: &str) -> Result<(String, String), String> {
    input
        .split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("Expected KEY=VALUE, got '{input}'"))
}

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // reads RUST_LOG
        .with_target(false)
        .with_level(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    setup_logging();

    let args = Args::parse();

    let mut environment = StandardEnvironment::new()
        .with_source(MapPropertySource::from_pairs(
            COMMAND_LINE_PROPERTY_SOURCE_NAME,
            args.overrides,
        ))
        .with_source(SystemEnvironmentPropertySource::new())
        .with_active_profiles(args.profiles);

    let processor = ParameterStorePostProcessor::new(Arc::new(AwsSsmClientFactory::new()));
    let mut context = BootstrapContext::new();
    processor
        .post_process_environment(&mut context, &mut environment)
        .await
        .context("Failed to bootstrap parameter store property sources")?;

    info!(
        sources = ?environment.property_sources(),
        "Environment ready"
    );

    let mut resolved = Vec::with_capacity(args.keys.len());
    for key in &args.keys {
        let value = environment
            .get_property(key)
            .await
            .with_context(|| format!("Failed to resolve '{key}'"))?;
        debug!(key = key.as_str(), found = value.is_some(), "Resolved property");
        resolved.push(ResolvedProperty { key, value });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        for ResolvedProperty { key, value } in resolved {
            match value {
                Some(value) => println!("{key}={value}"),
                None => println!("{key} is not set"),
            }
        }
    }

    Ok(())
}

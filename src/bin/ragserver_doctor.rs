//! Prints the effective backend settings and probes the collaborators.

use dotenv::dotenv;
use ragserver_settings::llm::azure::{AZURE_API_KEY_ENV, AZURE_ENDPOINT_ENV};
use ragserver_settings::{
    AzureChatModel, CHUNK_OVERLAP, CHUNK_SIZE, LogSettings, MAX_CONCURRENCY, PostgresUrl,
};
use tracing::{error, info, warn};
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    LogSettings::default().init()?;

    info!(
        "chunking: size={} overlap={} (model max_concurrency={})",
        CHUNK_SIZE, CHUNK_OVERLAP, MAX_CONCURRENCY
    );

    let model = AzureChatModel::from_env();
    info!(
        "chat model: deployment={} model_version={} model={} temperature={} api_version={}",
        model.deployment_name(),
        model.model_version(),
        model.model_name(),
        model.temperature(),
        model.api_version()
    );
    if model.api_base().is_empty() {
        warn!("{AZURE_ENDPOINT_ENV} is not set; chat requests will fail");
    } else if Url::parse(model.api_base()).is_err() {
        warn!("{AZURE_ENDPOINT_ENV} is not a valid URL: {}", model.api_base());
    }
    if !model.has_api_key() {
        warn!("{AZURE_API_KEY_ENV} is not set; chat requests will fail");
    }

    let postgres = PostgresUrl::from_env();
    info!("postgres: {postgres}");
    match postgres.connect().await {
        Ok(pool) => {
            info!("postgres reachable");
            pool.close().await;
        }
        Err(e) => {
            error!("postgres probe failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

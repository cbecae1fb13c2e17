//! Handle to the hosted Azure OpenAI chat deployment.

use std::env;
use std::fmt;
use std::time::Duration;

use async_openai::Client;
use async_openai::config::AzureConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
};
use tracing::info;

use crate::core::error::Result;
use crate::{MAX_CONCURRENCY, MODEL_NAME};

/// Deployment selected on the Azure side.
pub const AZURE_DEPLOYMENT_NAME: &str = "gpt-35-turbo-0125";

/// Version tag of the deployed model, carried as handle metadata.
pub const AZURE_MODEL_VERSION: &str = "0125";

/// Environment variable holding the Azure OpenAI endpoint.
pub const AZURE_ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";

/// Environment variable holding the API key.
pub const AZURE_API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";

/// Environment variable selecting the service API version.
pub const OPENAI_API_VERSION_ENV: &str = "OPENAI_API_VERSION";

const DEFAULT_API_VERSION: &str = "2024-02-01";

// Zero keeps answers deterministic across identical queries.
const TEMPERATURE: f32 = 0.0;

const REQUEST_TIMEOUT_SECS: u64 = 300;

/// A fully parameterized chat-model handle.
///
/// Deployment name, model version, and temperature are fixed; endpoint, key,
/// and API version come from the environment the way the SDK expects them.
/// Request dispatch, pooling, and retries belong to async-openai.
pub struct AzureChatModel {
    deployment_name: &'static str,
    model_version: &'static str,
    model: &'static str,
    temperature: f32,
    max_concurrency: usize,
    api_base: String,
    api_key: String,
    api_version: String,
    http: reqwest::Client,
}

impl AzureChatModel {
    /// Build the handle.
    ///
    /// Never fails: missing endpoint or key default to empty strings and
    /// surface as auth errors inside the SDK at request time. Every call
    /// yields an independent, identically parameterized handle.
    pub fn from_env() -> Self {
        let api_base = env::var(AZURE_ENDPOINT_ENV).unwrap_or_default();
        let api_key = env::var(AZURE_API_KEY_ENV).unwrap_or_default();
        let api_version =
            env::var(OPENAI_API_VERSION_ENV).unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "Azure chat model configured (deployment={}, model_version={})",
            AZURE_DEPLOYMENT_NAME, AZURE_MODEL_VERSION
        );

        Self {
            deployment_name: AZURE_DEPLOYMENT_NAME,
            model_version: AZURE_MODEL_VERSION,
            model: MODEL_NAME,
            temperature: TEMPERATURE,
            max_concurrency: MAX_CONCURRENCY,
            api_base,
            api_key,
            api_version,
            http,
        }
    }

    /// The configured SDK client. Each call constructs a fresh one over the
    /// shared HTTP connection pool.
    pub fn client(&self) -> Client<AzureConfig> {
        let config = AzureConfig::new()
            .with_api_base(self.api_base.clone())
            .with_api_key(self.api_key.clone())
            .with_api_version(self.api_version.clone())
            .with_deployment_id(self.deployment_name);
        Client::with_config(config).with_http_client(self.http.clone())
    }

    /// A chat request with this handle's deployment and temperature stamped in.
    pub fn completion_request(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<CreateChatCompletionRequest> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.deployment_name)
            .temperature(self.temperature)
            .messages(messages)
            .build()?;
        Ok(request)
    }

    pub fn deployment_name(&self) -> &str {
        self.deployment_name
    }

    pub fn model_version(&self) -> &str {
        self.model_version
    }

    pub fn model_name(&self) -> &str {
        self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Cap on in-flight model calls; enforcement sits with the caller and SDK.
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for AzureChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureChatModel")
            .field("deployment_name", &self.deployment_name)
            .field("model_version", &self.model_version)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_concurrency", &self.max_concurrency)
            .field("api_base", &self.api_base)
            .field("api_key", &"***")
            .field("api_version", &self.api_version)
            .finish()
    }
}

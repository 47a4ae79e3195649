//! crates.io registry API implementation

use crate::config::LookupConfig;
use crate::version::error::LookupError;
use crate::version::registry::Registry;
use crate::version::types::CrateResponse;
use tracing::debug;

/// Registry implementation for crates.io API
pub struct CratesIoRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl CratesIoRegistry {
    /// Creates a new CratesIoRegistry from the lookup configuration
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.registry_url.clone(),
        })
    }
}

impl Registry for CratesIoRegistry {
    async fn fetch_crate(&self, package_name: &str) -> Result<CrateResponse, LookupError> {
        let url = format!("{}/{}", self.base_url, package_name);
        debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            debug!("crates.io registry returned status {}: {}", status, url);
            return Err(LookupError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;

        let crate_response: CrateResponse = serde_json::from_slice(&body).inspect_err(|e| {
            debug!("Failed to parse crates.io registry response: {}", e);
        })?;

        debug!(
            "Received {} versions for {}",
            crate_response.versions.len(),
            package_name
        );

        Ok(crate_response)
    }
}

//! Selection of the latest release from a crate document

use tracing::debug;

use crate::config::DOCS_BASE_URL;
use crate::version::error::LookupError;
use crate::version::registry::Registry;
use crate::version::types::{CrateInfo, CrateResponse};

/// Fetches `package_name` from `registry` and returns its latest non-yanked release.
///
/// Makes exactly one request; no retries.
pub async fn lookup<R: Registry>(
    registry: &R,
    package_name: &str,
) -> Result<CrateInfo, LookupError> {
    let response = registry.fetch_crate(package_name).await?;
    select_latest(package_name, response)
}

/// Picks the first non-yanked record in registry order.
///
/// The list is not re-sorted by semver; crates.io sends newest first.
pub fn select_latest(
    package_name: &str,
    response: CrateResponse,
) -> Result<CrateInfo, LookupError> {
    if response.versions.is_empty() {
        return Err(LookupError::EmptyVersionList(package_name.to_string()));
    }

    let latest = response
        .versions
        .into_iter()
        .find(|v| !v.yanked)
        .ok_or_else(|| LookupError::AllYanked(package_name.to_string()))?;

    debug!(
        "Latest non-yanked version of {} is {}",
        package_name, latest.num
    );

    let metadata = response.krate;
    let documentation = metadata
        .documentation
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| format!("{}/{}", DOCS_BASE_URL, package_name));

    Ok(CrateInfo {
        name: package_name.to_string(),
        version_spec: version_spec(&latest.num),
        version: latest.num,
        description: metadata.description.unwrap_or_default(),
        homepage: metadata.homepage.unwrap_or_default(),
        repository: metadata.repository.unwrap_or_default(),
        documentation,
    })
}

/// Truncates a version to the `major.minor` form used in Cargo.toml.
///
/// Versions with fewer than two dot-separated components are returned as is.
pub fn version_spec(version: &str) -> String {
    let mut parts = version.split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        _ => version.to_string(),
    }
}

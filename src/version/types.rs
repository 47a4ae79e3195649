//! Wire types for the crates.io crate endpoint and the lookup result

use serde::{Deserialize, Deserializer, Serialize};

/// Response from `GET /api/v1/crates/<name>`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CrateResponse {
    #[serde(rename = "crate")]
    pub krate: CrateMetadata,
    /// Version records in registry order
    #[serde(deserialize_with = "null_as_default")]
    pub versions: Vec<CrateVersion>,
}

/// The `crate` object; crates.io sends `null` for unset links
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CrateMetadata {
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub documentation: Option<String>,
}

/// Version information from crates.io
#[derive(Debug, Deserialize)]
pub struct CrateVersion {
    pub num: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub yanked: bool,
}

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Latest release of a crate together with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrateInfo {
    pub name: String,
    /// Full version string as published
    pub version: String,
    /// `major.minor` form used in Cargo.toml
    pub version_spec: String,
    pub description: String,
    pub homepage: String,
    pub repository: String,
    pub documentation: String,
}

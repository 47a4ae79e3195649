//! Registry trait for fetching crate documents

use crate::version::error::LookupError;
use crate::version::types::CrateResponse;
use std::future::Future;

/// Trait for fetching a crate's metadata and version list from a registry
pub trait Registry: Send + Sync {
    /// Fetches the crate document for a package
    ///
    /// # Arguments
    /// * `package_name` - The crate name, interpolated into the request URL as given
    ///
    /// # Returns
    /// * `Ok(CrateResponse)` - Metadata and versions in registry order
    /// * `Err(LookupError)` - If the request or the decoding fails
    fn fetch_crate(
        &self,
        package_name: &str,
    ) -> impl Future<Output = Result<CrateResponse, LookupError>> + Send;
}

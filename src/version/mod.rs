//! Version lookup against the crates.io API
//!
//! - [`registry`]: Registry trait for fetching a crate document
//! - [`registries`]: Concrete registry implementations (crates.io)
//! - [`lookup`]: Selection of the latest non-yanked release
//! - [`types`]: Wire types and the `CrateInfo` result
//! - [`error`]: Error type for lookups

pub mod error;
pub mod lookup;
pub mod registries;
pub mod registry;
pub mod types;

pub use error::LookupError;
pub use lookup::{lookup, select_latest, version_spec};
pub use types::CrateInfo;

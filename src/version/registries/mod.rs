//! Registry implementations for fetching crate documents

pub mod crates_io;

pub use crates_io::CratesIoRegistry;

//! Per-title catalog assembly for console title databases.
//!
//! Title metadata arrives as a flat map of records keyed by title ID, with
//! base titles, updates and DLC all mixed together. This crate groups them
//! by base title using [`titledb_core::classify`] and attaches each title's
//! update history.

pub mod builder;
pub mod error;
pub mod loader;
pub mod types;

pub use builder::build_catalog;
pub use error::{CatalogError, CatalogInput};
pub use loader::{decode_titles, decode_versions, load_catalog, load_catalog_files};
pub use types::*;

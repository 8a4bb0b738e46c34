//! Title identifier decoding and metadata record types for console title
//! databases.
//!
//! This crate has no I/O. `titledb-catalog` builds on it to group records
//! into per-title aggregates.

pub mod attributes;
pub mod date;
pub mod title_id;

pub use attributes::{TitleAttributes, TitleVersion};
pub use date::normalize_release_date;
pub use title_id::{IdError, TitleId, TitleRole, base_id_for_key, classify};

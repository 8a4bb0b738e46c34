//! JSON decoding of title database inputs.
//!
//! Both inputs are JSON objects keyed by title ID:
//!
//! ```text
//! titles.json:   { "<title id>": { "id": ..., "name": ..., ... }, ... }
//! versions.json: { "<base title id>": { "<version>": "<release date>", ... }, ... }
//! ```
//!
//! Either input failing to decode aborts the load; no partial catalog is
//! ever returned.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use titledb_core::TitleAttributes;

use crate::builder::build_catalog;
use crate::error::{CatalogError, CatalogInput};
use crate::types::{Catalog, VersionHistory};

/// Decode the title metadata input.
pub fn decode_titles<R: Read>(
    reader: R,
) -> Result<HashMap<String, TitleAttributes>, CatalogError> {
    decode_map(reader, CatalogInput::Titles)
}

/// Decode the update version history input.
pub fn decode_versions<R: Read>(
    reader: R,
) -> Result<HashMap<String, VersionHistory>, CatalogError> {
    decode_map(reader, CatalogInput::Versions)
}

/// Decode both inputs and build a catalog from them.
pub fn load_catalog<T: Read, V: Read>(titles: T, versions: V) -> Result<Catalog, CatalogError> {
    let titles = decode_titles(titles)?;
    let versions = decode_versions(versions)?;
    Ok(build_catalog(titles, &versions))
}

/// Open, decode and build a catalog from a pair of JSON files.
pub fn load_catalog_files(titles: &Path, versions: &Path) -> Result<Catalog, CatalogError> {
    let titles = decode_titles(open(titles)?)?;
    let versions = decode_versions(open(versions)?)?;
    Ok(build_catalog(titles, &versions))
}

fn open(path: &Path) -> Result<BufReader<File>, CatalogError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })
}

/// A top-level `null` decodes as an empty map, a `null` entry as the
/// entry's zero value.
fn decode_map<R, T>(reader: R, input: CatalogInput) -> Result<HashMap<String, T>, CatalogError>
where
    R: Read,
    T: DeserializeOwned + Default,
{
    let map: Option<HashMap<String, Option<T>>> =
        serde_json::from_reader(reader).map_err(|e| CatalogError::decode(input, e))?;
    let map: HashMap<String, T> = map
        .unwrap_or_default()
        .into_iter()
        .map(|(id, value)| (id, value.unwrap_or_default()))
        .collect();
    log::debug!("Decoded {} {} entries", map.len(), input);
    Ok(map)
}

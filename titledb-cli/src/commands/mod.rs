pub(crate) mod classify;
pub(crate) mod config;
pub(crate) mod show;
pub(crate) mod stats;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use titledb_catalog::Catalog;

use crate::CliError;
use crate::cli_types::SourceArgs;
use crate::settings::resolve_sources;
use crate::spinner::load_spinner;

/// Resolve the input paths and build the catalog from them.
pub(crate) fn load(sources: &SourceArgs, quiet: bool) -> Result<Catalog, CliError> {
    let paths = resolve_sources(sources);
    log::debug!(
        "Loading titles from {} and versions from {}",
        paths.titles.display(),
        paths.versions.display(),
    );

    let pb = load_spinner("Loading title database...", quiet);
    let result = titledb_catalog::load_catalog_files(&paths.titles, &paths.versions);
    pb.finish_and_clear();
    let catalog = result?;

    if !catalog.rejected().is_empty() {
        log::warn!(
            "{} record(s) skipped for malformed title IDs",
            catalog
                .rejected()
                .len()
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(catalog)
}

/// Format a byte count with fractional KB/MB/GB (e.g., "1.5 KB", "3.2 GB").
///
/// Digital titles are commonly several gigabytes, hence the GB step.
pub(crate) fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

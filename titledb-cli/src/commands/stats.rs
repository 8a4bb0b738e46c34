use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::SourceArgs;

pub(crate) fn run_stats(
    sources: &SourceArgs,
    show_rejected: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let catalog = super::load(sources, quiet)?;
    let stats = catalog.stats();

    log::info!(
        "{}",
        "Title Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("  Titles:         {:>8}", stats.titles);
    log::info!("  With base:      {:>8}", stats.with_base);
    log::info!("  With updates:   {:>8}", stats.with_updates);
    log::info!("  DLC:            {:>8}", stats.dlc);
    log::info!("  Rejected IDs:   {:>8}", stats.rejected);

    if show_rejected && !catalog.rejected().is_empty() {
        crate::log_blank();
        log::info!("{}", "Rejected:".if_supports_color(Stdout, |t| t.bold()));
        for (id, err) in catalog.rejected() {
            log::info!(
                "  {}  {}",
                id.if_supports_color(Stdout, |t| t.red()),
                err.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    Ok(())
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::SourceArgs;
use crate::settings;

/// Show the settings file and the paths a build would use right now.
pub(crate) fn run_config_show(sources: &SourceArgs) {
    let path = settings::settings_path();
    log::info!(
        "{}",
        "titledb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let resolved = settings::resolve_sources(sources);
    crate::log_blank();
    log::info!("  Titles:   {}", resolved.titles.display());
    log::info!("  Versions: {}", resolved.versions.display());

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

pub(crate) fn run_config_set_sources(sources: &SourceArgs) -> Result<(), CliError> {
    if sources.titles.is_none() && sources.versions.is_none() {
        return Err(CliError::config("pass --titles and/or --versions"));
    }
    settings::save_sources(sources.titles.as_deref(), sources.versions.as_deref())?;
    log::info!(
        "Saved sources to {}",
        settings::settings_path().display()
    );
    Ok(())
}

pub(crate) fn run_config_clear() -> Result<(), CliError> {
    settings::clear_sources()?;
    log::info!("Cleared saved sources");
    Ok(())
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use titledb_catalog::TitleAggregate;
use titledb_core::{TitleAttributes, TitleId};

use super::format_size;
use crate::CliError;
use crate::cli_types::SourceArgs;

pub(crate) fn run_show(sources: &SourceArgs, raw_id: &str, quiet: bool) -> Result<(), CliError> {
    let id = TitleId::parse(raw_id)?;
    let catalog = super::load(sources, quiet)?;
    let title = catalog
        .get(id.base_key())
        .ok_or_else(|| CliError::not_found(format!("no title for {}", id.base_id())))?;

    print_title(&id, title);
    Ok(())
}

fn print_title(id: &TitleId, title: &TitleAggregate) {
    log::info!(
        "{} {}",
        title
            .display_name()
            .unwrap_or("(unnamed)")
            .if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", id.base_id()).if_supports_color(Stdout, |t| t.dimmed()),
    );

    match &title.attributes {
        Some(base) => print_attributes(base, "  "),
        None => log::info!(
            "  {}",
            "No base record".if_supports_color(Stdout, |t| t.yellow())
        ),
    }

    crate::log_blank();
    match &title.updates {
        Some(history) if !history.is_empty() => {
            log::info!("  {}", "Updates:".if_supports_color(Stdout, |t| t.bold()));
            for (version, date) in history {
                log::info!("    v{:<10} {}", version, date);
            }
        }
        Some(_) => log::info!("  Updates: (no published history)"),
        None => log::info!("  Updates: none"),
    }

    crate::log_blank();
    if title.dlc.is_empty() {
        log::info!("  DLC: none");
    } else {
        log::info!(
            "  {} {}",
            "DLC:".if_supports_color(Stdout, |t| t.bold()),
            title.dlc.len(),
        );
        for (dlc_id, dlc) in &title.dlc {
            log::info!(
                "    {}  {}  {}",
                dlc_id.if_supports_color(Stdout, |t| t.cyan()),
                dlc.name,
                dlc.parsed_release_date.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}

fn print_attributes(attrs: &TitleAttributes, indent: &str) {
    for (label, value) in attribute_lines(attrs) {
        log::info!("{}{:<12} {}", indent, format!("{}:", label), value);
    }
}

/// Label/value pairs for the populated fields of a record. Zero and empty
/// fields are left out.
fn attribute_lines(attrs: &TitleAttributes) -> Vec<(&'static str, String)> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    [
        ("Publisher", non_empty(&attrs.publisher)),
        ("Region", non_empty(&attrs.region)),
        (
            "Released",
            (attrs.release_date != 0).then(|| attrs.parsed_release_date.clone()),
        ),
        ("Version", non_empty(attrs.version.as_str())),
        ("Size", (attrs.size > 0).then(|| format_size(attrs.size))),
        (
            "Screenshots",
            (!attrs.screenshots.is_empty()).then(|| attrs.screenshots.len().to_string()),
        ),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_valued_record_prints_nothing() {
        assert!(attribute_lines(&TitleAttributes::default()).is_empty());
    }

    #[test]
    fn populated_fields_are_listed_in_order() {
        let mut attrs = TitleAttributes::new("0100a2c3d4e50000").with_release_date(20230615);
        attrs.parsed_release_date = "2023-06-15".into();
        attrs.publisher = "Example Games".into();
        attrs.size = 1536;
        attrs.screenshots = vec!["a.jpg".into(), "b.jpg".into()];

        let lines = attribute_lines(&attrs);
        assert_eq!(
            lines,
            vec![
                ("Publisher", "Example Games".to_string()),
                ("Released", "2023-06-15".to_string()),
                ("Size", "1.5 KB".to_string()),
                ("Screenshots", "2".to_string()),
            ]
        );
    }
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use titledb_core::{TitleId, TitleRole};

/// Print the role and base key of each ID. Returns how many failed to decode.
pub(crate) fn run_classify(ids: &[String]) -> usize {
    let mut failed = 0;
    for raw in ids {
        match TitleId::parse(raw) {
            Ok(id) => {
                let role = match id.role() {
                    TitleRole::Base => "base".if_supports_color(Stdout, |t| t.green()).to_string(),
                    TitleRole::Update => "update".if_supports_color(Stdout, |t| t.cyan()).to_string(),
                    TitleRole::Dlc => "dlc".if_supports_color(Stdout, |t| t.magenta()).to_string(),
                };
                log::info!(
                    "{}  {:<6}  base {}",
                    id.as_str().if_supports_color(Stdout, |t| t.bold()),
                    role,
                    id.base_id(),
                );
            }
            Err(e) => {
                log::error!("{}", e);
                failed += 1;
            }
        }
    }
    failed
}

use crate::cli::commands::list::print_view;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::ItemStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{now_rfc3339, parse_date_time};

/// Resolve an optional `--at` argument into the text stored in `dateTime`.
pub fn resolve_at(at: Option<&str>) -> AppResult<String> {
    match at {
        Some(text) => parse_date_time(text)
            .map(|dt| dt.to_rfc3339())
            .ok_or_else(|| AppError::MalformedInput(format!("unparseable date-time '{}'", text))),
        None => Ok(now_rfc3339()),
    }
}

/// Add a new item.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { id, at } = cmd {
        let date_time = resolve_at(at.as_deref())?;

        let store = ItemStore::open(&cfg.database)?;

        //
        // automatic path → highest id + 1, manual path → whatever the user asked
        //
        let id = match id {
            Some(explicit) => *explicit,
            None => store.next_id()?,
        };

        let item = store.add(id, &date_time)?;
        success(format!("Added item {} ({})", item.id, date_time));

        print_view(&store, cfg)?;
    }

    Ok(())
}

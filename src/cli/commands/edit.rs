use crate::cli::commands::add::resolve_at;
use crate::cli::commands::list::print_view;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::ItemStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, at } = cmd {
        let date_time = resolve_at(at.as_deref())?;

        let store = ItemStore::open(&cfg.database)?;

        if store.update(*id, &date_time)? {
            success(format!("Item {} reset to {}", id, date_time));
        } else {
            warning(format!("No item with id {}; nothing changed.", id));
        }

        print_view(&store, cfg)?;
    }

    Ok(())
}

use crate::cli::commands::list::print_since;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::store::ItemStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Since = cmd {
        let store = ItemStore::open(&cfg.database)?;
        match store.current()? {
            Some(item) => print_since(&item, &SystemClock),
            None => info("No items yet."),
        }
    }
    Ok(())
}

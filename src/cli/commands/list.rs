use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::elapsed::Elapsed;
use crate::core::store::ItemStore;
use crate::errors::AppResult;
use crate::models::item::Item;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_sign, colorize_row};
use crate::utils::elapsed2readable;
use crate::utils::formatting::{bold, pad_left};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let store = ItemStore::open(&cfg.database)?;
        print_view(&store, cfg)?;
    }
    Ok(())
}

/// Re-read everything from the store and render it.
/// Called after every mutation: the display never patches a stale list.
pub fn print_view(store: &ItemStore, cfg: &Config) -> AppResult<()> {
    let items = store.list_all()?;

    header("Counter");
    if items.is_empty() {
        println!("No items yet. Use `rtimesince add` to start a counter.");
        return Ok(());
    }

    print_since(&items[0], &SystemClock);
    println!();
    print_items(&items, cfg);
    Ok(())
}

pub fn print_items(items: &[Item], cfg: &Config) {
    let id_w = items
        .iter()
        .map(|it| it.id.to_string().len())
        .max()
        .unwrap_or(1);

    for (idx, item) in items.iter().enumerate() {
        let row = format!(
            "{}  -  {}",
            pad_left(&item.id.to_string(), id_w),
            item.display_date_time(&cfg.display_format)
        );
        println!("{}", colorize_row(&row, idx == 0));
    }
}

/// An undated or unreadable current item only produces a warning: the view is
/// rendered after mutations that are already committed.
pub fn print_since(current: &Item, clock: &dyn Clock) {
    let reference = match current.timestamp() {
        Ok(dt) => dt,
        Err(e) => {
            warning(format!("Cannot compute elapsed time: {}", e));
            return;
        }
    };

    let elapsed = Elapsed::between(&reference, &clock.now());
    println!(
        "{} {}{}{}",
        bold("Time passed:"),
        color_for_sign(elapsed.is_negative()),
        elapsed2readable(&elapsed),
        RESET
    );
}

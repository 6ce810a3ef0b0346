use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::elapsed::Elapsed;
use crate::core::store::ItemStore;
use crate::core::ticker::Ticker;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_sign};
use crate::utils::elapsed2readable;
use chrono::{DateTime, FixedOffset};
use std::io::{self, Write};
use std::time::Duration;

fn render(reference: &DateTime<FixedOffset>, clock: &dyn Clock) {
    let elapsed = Elapsed::between(reference, &clock.now());
    // \x1b[2K clears the previous, possibly longer, line
    print!(
        "\r\x1b[2KTime passed: {}{}{}",
        color_for_sign(elapsed.is_negative()),
        elapsed2readable(&elapsed),
        RESET
    );
    io::stdout().flush().ok();
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks, interval } = cmd {
        let store = ItemStore::open(&cfg.database)?;

        let Some(current) = store.current()? else {
            info("No items yet.");
            return Ok(());
        };

        let reference = current.timestamp()?;
        let period = Duration::from_millis(interval.unwrap_or(cfg.refresh_interval_ms).max(1));
        let limit = *ticks;

        info(format!("Watching item {} (Ctrl-C to quit)", current.id));

        // the immediate render is refresh #1; the ticker provides the rest
        render(&reference, &SystemClock);
        let remaining = limit.map(|max| max.saturating_sub(1));

        if remaining == Some(0) {
            println!();
            return Ok(());
        }

        let ticker = Ticker::start(period, move |n| {
            render(&reference, &SystemClock);
            remaining.is_none_or(|max| n < max)
        });

        // the ticker is owned by this view; leaving the scope stops it
        ticker.join();
        println!();
    }
    Ok(())
}

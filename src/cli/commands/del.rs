use crate::cli::commands::list::print_view;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::ItemStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all, yes } = cmd {
        //
        // Confirmation prompt
        //
        let prompt = match id {
            Some(id) if !*all => format!("Delete item {}? This action is irreversible.", id),
            _ => "Delete ALL items? This action is irreversible.".to_string(),
        };

        if cfg.confirm_deletes && !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let store = ItemStore::open(&cfg.database)?;

        match id {
            Some(id) if !*all => {
                if store.delete_one(*id)? {
                    success(format!("Item {} has been deleted.", id));
                } else {
                    info(format!("No item with id {}; nothing deleted.", id));
                }
            }
            _ => {
                let n = store.delete_all()?;
                success(format!("All items have been deleted ({}).", n));
            }
        }

        print_view(&store, cfg)?;
    }

    Ok(())
}

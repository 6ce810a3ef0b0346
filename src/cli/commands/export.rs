use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::{ExportLogic, items_to_json};
use crate::core::store::ItemStore;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        pretty,
        force,
    } = cmd
    {
        let store = ItemStore::open(&cfg.database)?;

        let json = if *pretty {
            items_to_json(&store.list_all()?, true)?
        } else {
            store.export_all()?
        };

        match file {
            Some(f) => ExportLogic::write_file(&expand_tilde(f), &json, *force)?,
            // bare JSON on stdout so it can be piped straight into `import`
            None => println!("{}", json),
        }
    }
    Ok(())
}

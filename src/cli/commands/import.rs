use crate::cli::commands::list::print_view;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::store::ItemStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = file.as_deref().map(expand_tilde);
        let payload = ExportLogic::read_payload(path.as_deref())?;

        let store = ItemStore::open(&cfg.database)?;
        let report = store.import_all(&payload)?;

        success(format!("Imported {} item(s).", report.imported.len()));
        for (id, reason) in &report.failed {
            warning(format!("Skipped item {}: {}", id, reason));
        }

        print_view(&store, cfg)?;
    }
    Ok(())
}

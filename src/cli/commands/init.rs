use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(path: &Path, force: bool, is_test: bool) -> AppResult<()> {
    if is_test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::default();
    cfg.save_to(path)?;

    success(format!("Config file: {}", path.display()));
    info(format!("Work history: {}", cfg.history_file));
    info(format!("Account:      {}", cfg.account_file));
    Ok(())
}

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cfg: &Config, path: &Path, print_config: bool, show_path: bool) -> AppResult<()> {
    if show_path {
        println!("{}", path.display());
    }

    if print_config || !show_path {
        header("Current configuration");
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    Ok(())
}

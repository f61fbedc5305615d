use crate::cli::commands::{load_view, source_from};
use crate::cli::parser::ViewArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::path::expand_tilde;
use chrono::{DateTime, Utc};

pub struct ExportArgs<'a> {
    pub format: ExportFormat,
    pub file: Option<&'a str>,
    pub out_dir: Option<&'a str>,
    pub force: bool,
    pub view: &'a ViewArgs,
}

/// Handle the `export` command
pub fn handle(cfg: &Config, args: ExportArgs<'_>, now: DateTime<Utc>) -> AppResult<()> {
    let source = source_from(cfg);
    let view = load_view(cfg, &source, args.view, now)?;

    let file = args.file.map(expand_tilde);
    let out_dir = args
        .out_dir
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.output_path());

    ExportLogic::export(
        &view,
        &source,
        args.format,
        file.as_deref(),
        &out_dir,
        args.force,
    )?;
    Ok(())
}

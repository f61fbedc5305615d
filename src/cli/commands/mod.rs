pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod session;

use crate::cli::parser::ViewArgs;
use crate::config::Config;
use crate::core::WorkHistoryView;
use crate::errors::AppResult;
use crate::models::SortSpec;
use crate::session::TokenStore;
use crate::source::JsonFileSource;
use chrono::{DateTime, Utc};

pub(crate) fn source_from(cfg: &Config) -> JsonFileSource {
    JsonFileSource::new(cfg.history_path(), cfg.account_path())
}

/// Check the session, fetch the history and apply sorting / custom range.
pub(crate) fn load_view(
    cfg: &Config,
    source: &JsonFileSource,
    args: &ViewArgs,
    now: DateTime<Utc>,
) -> AppResult<WorkHistoryView> {
    TokenStore::new(cfg.token_path()).require()?;

    let sort = SortSpec::new(
        args.sort.unwrap_or(cfg.default_sort),
        args.direction.unwrap_or(cfg.default_direction),
    );

    let mut view = WorkHistoryView::new()
        .with_sort(sort)
        .with_window_days(cfg.window_days);

    view.activate(source, &cfg.user_id, now)?;

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        view.search(from, to);
    }

    Ok(view)
}

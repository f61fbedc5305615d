use crate::core::calculator::{aggregate_duration, filter_by_window, sort_records};
use crate::core::report::{ReportDocument, build_report};
use crate::errors::AppResult;
use crate::export::ReportRenderer;
use crate::models::window::DEFAULT_WINDOW_DAYS;
use crate::models::{AccountDetails, FilterWindow, SortSpec, ViewState, WorkRecord};
use crate::session::SessionHandler;
use crate::source::WorkHistorySource;
use crate::ui::messages::warning;
use crate::utils::formatting::format_total;
use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};

/// Holds the user's work history and the filtered, sorted, totalled
/// projection of it that is currently shown.
///
/// The master list is replaced only when a fetch result is applied; every
/// other action rebuilds the derived view from it.
#[derive(Debug, Clone)]
pub struct WorkHistoryView {
    history: Vec<WorkRecord>,
    filtered: Vec<WorkRecord>,
    total: Duration,
    sort: SortSpec,
    window_days: i64,
    start_input: String,
    end_input: String,
    search_performed: bool,
    state: ViewState,
}

impl Default for WorkHistoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkHistoryView {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            filtered: Vec::new(),
            total: Duration::zero(),
            sort: SortSpec::default(),
            window_days: DEFAULT_WINDOW_DAYS,
            start_input: String::new(),
            end_input: String::new(),
            search_performed: false,
            state: ViewState::Loading,
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Length of the rolling default window.
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    /// Fetch the history of `user_id` and show the default window.
    pub fn activate(
        &mut self,
        source: &dyn WorkHistorySource,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        self.state = ViewState::Loading;
        let result = source.fetch_work_history(user_id);
        self.apply_history(result, now)
    }

    /// Apply a fetch result. Results are applied in the order they are
    /// handed in; there is no request sequencing.
    pub fn apply_history(
        &mut self,
        result: AppResult<Vec<WorkRecord>>,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        match result {
            Ok(records) => {
                self.history = records;
                self.state = ViewState::Ready;
                self.apply_default_filter(now);
                Ok(())
            }
            Err(e) => {
                warning(format!("Work history unavailable: {e}"));
                self.state = ViewState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Show shifts that started in the last `window_days` up to `now`.
    pub fn apply_default_filter(&mut self, now: DateTime<Utc>) {
        let window = FilterWindow::last_days(now, self.window_days);
        self.apply_window(&window);
    }

    pub fn apply_window(&mut self, window: &FilterWindow) {
        self.filtered = filter_by_window(&self.history, window);
        self.refresh();
    }

    /// Search an explicit `YYYY-MM-DD` range. Both ends are midnight UTC,
    /// so shifts starting later on the end day fall outside.
    pub fn search(&mut self, start_input: &str, end_input: &str) {
        self.search_performed = true;
        self.start_input = start_input.to_string();
        self.end_input = end_input.to_string();

        match FilterWindow::from_inputs(start_input, end_input) {
            Some(window) => self.apply_window(&window),
            None => {
                warning(format!(
                    "Invalid search range '{start_input}' - '{end_input}' (expected YYYY-MM-DD)"
                ));
                self.filtered.clear();
                self.refresh();
            }
        }
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.refresh();
    }

    fn refresh(&mut self) {
        sort_records(&mut self.filtered, &self.sort);
        self.total = aggregate_duration(&self.filtered);
    }

    pub fn build_report(&self, account: &AccountDetails) -> ReportDocument {
        build_report(&self.filtered, account, self.total)
    }

    /// Fetch account details and assemble the report for the current view.
    pub fn prepare_report(&self, source: &dyn WorkHistorySource) -> AppResult<ReportDocument> {
        let account = source.fetch_account_details()?;
        Ok(self.build_report(&account))
    }

    /// Render the report and save it in `dir` under its own file name.
    pub fn download_report(
        &self,
        source: &dyn WorkHistorySource,
        renderer: &dyn ReportRenderer,
        dir: &Path,
    ) -> AppResult<PathBuf> {
        self.download_report_with(source, renderer, dir, |_| Ok(()))
    }

    /// [`download_report`](Self::download_report) with a check on the
    /// target path before anything is written. An error from
    /// `before_save` aborts the download.
    pub fn download_report_with<F>(
        &self,
        source: &dyn WorkHistorySource,
        renderer: &dyn ReportRenderer,
        dir: &Path,
        before_save: F,
    ) -> AppResult<PathBuf>
    where
        F: FnOnce(&Path) -> AppResult<()>,
    {
        let doc = self.prepare_report(source)?;
        before_save(&dir.join(&doc.file_name))?;
        renderer.render(&doc)?.download(dir, &doc.file_name)
    }

    /// Hand the logout over to the session owner and drop loaded data.
    pub fn logout(&mut self, session: &mut dyn SessionHandler) -> AppResult<()> {
        session.logout()?;
        *self = Self::new()
            .with_sort(self.sort)
            .with_window_days(self.window_days);
        Ok(())
    }

    pub fn history(&self) -> &[WorkRecord] {
        &self.history
    }

    pub fn records(&self) -> &[WorkRecord] {
        &self.filtered
    }

    pub fn total_duration(&self) -> Duration {
        self.total
    }

    /// Total as `{H}h {M}m {S}s`.
    pub fn total_label(&self) -> String {
        format_total(self.total)
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn search_inputs(&self) -> (&str, &str) {
        (&self.start_input, &self.end_input)
    }

    pub fn search_performed(&self) -> bool {
        self.search_performed
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

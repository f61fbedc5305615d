//! Data source contract for work history and account details.
//!
//! The transport behind a source (HTTP, files, fixtures) is not the core's
//! concern; every source hands back records already validated by
//! [`payload`].

mod json_file;
pub mod payload;

pub use json_file::JsonFileSource;
pub use payload::{ParsedHistory, parse_account, parse_history};

use crate::errors::AppResult;
use crate::models::{AccountDetails, WorkRecord};

pub trait WorkHistorySource {
    /// Full history of `user_id`.
    fn fetch_work_history(&self, user_id: &str) -> AppResult<Vec<WorkRecord>>;

    /// Identity of the logged-in user.
    fn fetch_account_details(&self) -> AppResult<AccountDetails>;
}

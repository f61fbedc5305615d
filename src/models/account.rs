use serde::{Deserialize, Serialize};

/// Identity of the logged-in user, shown in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub user_email: String,
    pub name: String,
    pub surname: String,
    pub position: String,
}

impl AccountDetails {
    /// File name used when the report is downloaded.
    pub fn report_file_name(&self) -> String {
        format!("work_history_{}_{}.pdf", self.name, self.surname)
    }
}

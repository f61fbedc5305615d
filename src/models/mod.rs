pub mod account;
pub mod duration;
pub mod sort;
pub mod view_state;
pub mod window;
pub mod work_record;

pub use account::AccountDetails;
pub use duration::ShiftDuration;
pub use sort::{SortDirection, SortKey, SortSpec};
pub use view_state::ViewState;
pub use window::FilterWindow;
pub use work_record::WorkRecord;

/// Loading state of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Ready,
    /// Last fetch failed; the view keeps whatever it had before.
    Failed(String),
}

impl ViewState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready)
    }
}

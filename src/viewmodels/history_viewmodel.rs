// ============================================================================
// HISTORY VIEWMODEL - which branch of #historyContainer to show
// ============================================================================

use crate::models::HistoryEntry;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum HistoryView {
    /// No data: not logged in, or the fetch failed
    LoginPrompt,
    /// Logged in, nothing booked yet
    Empty,
    /// One summary line per booking
    Entries(Vec<String>),
}

impl HistoryView {
    pub fn from_fetch(history: Option<Vec<HistoryEntry>>) -> Self {
        match history {
            None => HistoryView::LoginPrompt,
            Some(entries) if entries.is_empty() => HistoryView::Empty,
            Some(entries) => HistoryView::Entries(entries.iter().map(HistoryEntry::summary).collect()),
        }
    }
}

use crate::models::Page;

/// What a submitted form wants the page to do next
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FlowOutcome {
    pub notice: String,
    pub redirect: Option<Page>,
}

impl FlowOutcome {
    pub fn navigate(notice: impl Into<String>, page: Page) -> Self {
        Self {
            notice: notice.into(),
            redirect: Some(page),
        }
    }

    /// Show a message and stay on the page
    pub fn stay(notice: impl Into<String>) -> Self {
        Self {
            notice: notice.into(),
            redirect: None,
        }
    }
}

// ============================================================================
// PROFILE VIEWMODEL - welcome banner + booking form pre-fill
// ============================================================================

use crate::models::UserProfile;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum WelcomeView {
    Greeting(String),
    SignInPrompt,
}

impl WelcomeView {
    pub fn from_profile(user: Option<&UserProfile>) -> Self {
        match user.and_then(UserProfile::display_name) {
            Some(name) => WelcomeView::Greeting(name),
            None => WelcomeView::SignInPrompt,
        }
    }
}

/// Values to copy into #bookingForm, by field id
pub fn booking_prefill(user: &UserProfile) -> Vec<(&'static str, String)> {
    [("name", user.name()), ("email", user.email()), ("phone", user.phone())]
        .into_iter()
        .filter_map(|(id, value)| value.map(|v| (id, v)))
        .collect()
}

use crate::config::{PageConfig, CONFIG};

/// Navigation targets. Routing is plain relative filenames.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Login,
    Register,
    Home,
    AdminHome,
    Booking,
}

impl Page {
    pub fn file_name(self) -> &'static str {
        self.file_name_in(&CONFIG.pages)
    }

    pub fn file_name_in(self, pages: &PageConfig) -> &str {
        match self {
            Page::Login => &pages.login,
            Page::Register => &pages.register,
            Page::Home => &pages.home,
            Page::AdminHome => &pages.admin_home,
            Page::Booking => &pages.booking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let pages = PageConfig::default();
        assert_eq!(Page::Login.file_name_in(&pages), "user_login.html");
        assert_eq!(Page::Home.file_name_in(&pages), "homepage.html");
        assert_eq!(Page::AdminHome.file_name_in(&pages), "admin_homepage.html");
        assert_eq!(Page::Register.file_name_in(&pages), "registration.html");
        assert_eq!(Page::Booking.file_name_in(&pages), "booking.html");
    }
}

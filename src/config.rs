// ============================================================================
// CONFIG - Build-time configuration (see build.rs and .env.example)
// ============================================================================

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub pages: PageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            pages: PageConfig::default(),
        }
    }
}

/// Relative filenames used as navigation targets
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub login: String,
    pub register: String,
    pub home: String,
    pub admin_home: String,
    pub booking: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            login: "user_login.html".to_string(),
            register: "registration.html".to_string(),
            home: "homepage.html".to_string(),
            admin_home: "admin_homepage.html".to_string(),
            booking: "booking.html".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            pages: PageConfig {
                login: option_env!("LOGIN_PAGE")
                    .map(str::to_string).unwrap_or(defaults.pages.login),
                register: option_env!("REGISTER_PAGE")
                    .map(str::to_string).unwrap_or(defaults.pages.register),
                home: option_env!("HOME_PAGE")
                    .map(str::to_string).unwrap_or(defaults.pages.home),
                admin_home: option_env!("ADMIN_HOME_PAGE")
                    .map(str::to_string).unwrap_or(defaults.pages.admin_home),
                booking: option_env!("BOOKING_PAGE")
                    .map(str::to_string).unwrap_or(defaults.pages.booking),
            },
        }
    }

    /// Scheme + host + port of the backend, used in connectivity hints
    pub fn backend_origin(&self) -> &str {
        let url = self.api_base_url.as_str();
        let host_start = url.find("://").map(|i| i + 3).unwrap_or(0);
        match url[host_start..].find('/') {
            Some(path_start) => &url[..host_start + path_start],
            None => url,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_origin_strips_api_path() {
        let config = AppConfig::default();
        assert_eq!(config.backend_origin(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_backend_origin_without_path() {
        let config = AppConfig {
            api_base_url: "https://bikes.example.org".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_origin(), "https://bikes.example.org");
    }

    #[test]
    fn test_default_pages() {
        let pages = PageConfig::default();
        assert_eq!(pages.login, "user_login.html");
        assert_eq!(pages.admin_home, "admin_homepage.html");
    }
}

use std::env;

pub const DEFAULT_MAILERSEND_API_URL: &str = "https://api.mailersend.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mailersend_api_key: Option<String>,
    pub mailersend_api_url: String,
    pub from_email: Option<String>,
    pub to_email: Option<String>,
}

impl AppConfig {
    /// Reads the handler configuration from the process environment.
    ///
    /// Nothing here is mandatory at load time: a missing credential or
    /// address only surfaces when an email is actually sent.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            mailersend_api_key: non_blank_var("MAILERSEND_API_KEY"),
            mailersend_api_url: non_blank_var("MAILERSEND_API_URL")
                .unwrap_or_else(|| DEFAULT_MAILERSEND_API_URL.to_string()),
            from_email: non_blank_var("FROM_EMAIL"),
            to_email: non_blank_var("TO_EMAIL"),
        }
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

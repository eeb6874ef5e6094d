use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
    pub auth_token: Option<String>,
    pub request_timeout_secs: u64,
    pub save_on_exit: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            auth_token: env::var("AUTH_TOKEN").ok().filter(|t| !t.is_empty()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            save_on_exit: env::var("SAVE_ON_EXIT")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

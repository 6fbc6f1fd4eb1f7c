use crate::api::error;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_NOTIFY_FROM: &str = "notifications@example.com";
pub const NOTIFICATION_FUNCTION_PATH: &str = "/functions/v1/send-message-email";

pub struct Env {
    pub database_url: Option<String>,
    pub anon_key: String,
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub notify_from: String,
    pub notify_to: Option<String>,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Env {
    fn new() -> Self {
        let database_url = non_empty_var("DATABASE_URL");
        let anon_key = std::env::var("ANON_KEY")
            .expect("ANON_KEY must be set in .env file or environment variable");

        let resend_api_key = non_empty_var("RESEND_API_KEY");
        let resend_api_url =
            std::env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string());
        let notify_from =
            std::env::var("NOTIFY_FROM").unwrap_or_else(|_| DEFAULT_NOTIFY_FROM.to_string());
        let notify_to = non_empty_var("NOTIFY_TO");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        Env {
            database_url,
            anon_key,
            resend_api_key,
            resend_api_url,
            notify_from,
            notify_to,
            frontend_url,
            ip,
            port,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings a browser-side caller holds: where the store lives and its public key.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub anon_key: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, anon_key: anon_key.into() }
    }

    /// Reads `STORE_BASE_URL` and `STORE_ANON_KEY`.
    pub fn from_env() -> Result<Self, error::SystemError> {
        Self::from_lookup(non_empty_var)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, error::SystemError> {
        let base_url = lookup("STORE_BASE_URL")
            .ok_or_else(|| error::SystemError::bad_request("STORE_BASE_URL is not set"))?;
        let anon_key = lookup("STORE_ANON_KEY")
            .ok_or_else(|| error::SystemError::bad_request("STORE_ANON_KEY is not set"))?;
        Ok(Self::new(base_url, anon_key))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

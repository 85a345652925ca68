use std::env;

/// Session cookie and token signing configuration.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    /// Lifetime of a session token in seconds.
    pub session_expiry: i64,
    /// Lifetime of an invite token in seconds.
    pub invite_expiry: i64,
    pub cookie_name: String,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            session_expiry: env::var("SESSION_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            invite_expiry: env::var("INVITE_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "fablingo_session".to_string()),
        }
    }
}

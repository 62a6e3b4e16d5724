/// Accounts service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access and refresh tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3117). Env var: `ACCOUNTS_PORT`.
    pub accounts_port: u16,
    /// HTTP mail API endpoint for credential delivery.
    pub mail_api_url: String,
    /// Bearer key for the mail API.
    pub mail_api_key: String,
    /// Sender address on credential mails.
    pub mail_from: String,
    /// Login URL included in credential mails.
    pub login_url: String,
}

impl AccountsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            accounts_port: std::env::var("ACCOUNTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3117),
            mail_api_url: std::env::var("MAIL_API_URL").expect("MAIL_API_URL"),
            mail_api_key: std::env::var("MAIL_API_KEY").expect("MAIL_API_KEY"),
            mail_from: std::env::var("MAIL_FROM").expect("MAIL_FROM"),
            login_url: std::env::var("LOGIN_URL").expect("LOGIN_URL"),
        }
    }
}

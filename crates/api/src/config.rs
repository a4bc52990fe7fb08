/// Server configuration loaded from environment variables.
///
/// Everything except the RAWG credential has a default suitable for local
/// development.  In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Inbound HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// RAWG API credential, sent as the `key` query parameter on every
    /// upstream call.  Required; validity is only checked by upstream.
    pub rawg_api_key: String,
    /// Base URL of the RAWG API.
    pub rawg_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `4000`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `RAWG_API_KEY`         | -- (required)               |
    /// | `RAWG_BASE_URL`        | `https://api.rawg.io/api`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let rawg_api_key = std::env::var("RAWG_API_KEY").expect("RAWG_API_KEY must be set");

        let rawg_base_url = std::env::var("RAWG_BASE_URL")
            .unwrap_or_else(|_| catalog_rawg::DEFAULT_BASE_URL.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            rawg_api_key,
            rawg_base_url,
        }
    }
}

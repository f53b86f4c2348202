use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// Remote backend speaking `/api/users` over HTTP.
    Http,
    /// In-process store seeded with demo users.
    Memory,
}

impl std::str::FromStr for BackendMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(BackendMode::Http),
            "memory" => Ok(BackendMode::Memory),
            other => anyhow::bail!("unknown BACKEND_MODE {other:?} (expected http or memory)"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub backend_mode: BackendMode,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(3000),
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            backend_mode: std::env::var("BACKEND_MODE")
                .map(|v| v.parse())
                .unwrap_or(Ok(BackendMode::Http))?,
        })
    }

    /// Banner text shown on the overview page when the backend cannot be reached.
    pub fn unavailable_message(&self) -> String {
        format!(
            "Unable to connect to the user backend. Make sure the user service is running at {}.",
            self.backend_url
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            backend_url: "http://localhost:8080".into(),
            backend_mode: BackendMode::Http,
        }
    }
}

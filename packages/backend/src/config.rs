use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub log_level: String,
    /// Directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "sqlite:alphabetgame.db?mode=rwc".to_string());

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = file_log_dir(
            std::env::var("ENABLE_FILE_LOGS").ok().as_deref(),
            std::env::var("LOG_DIR").ok().as_deref(),
        );

        Self {
            host,
            port,
            database_url,
            log_level,
            log_dir,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// File logging is opt-in via `ENABLE_FILE_LOGS`; `LOG_DIR` picks the
/// directory and defaults to `./logs`.
fn file_log_dir(enable: Option<&str>, dir: Option<&str>) -> Option<String> {
    match enable {
        Some("true") | Some("1") => Some(dir.unwrap_or("./logs").to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logging_is_off_unless_asked_for() {
        assert_eq!(file_log_dir(None, None), None);
        assert_eq!(file_log_dir(Some("false"), Some("/var/log")), None);
        assert_eq!(file_log_dir(Some("yes"), None), None);
    }

    #[test]
    fn file_logging_uses_the_configured_directory() {
        assert_eq!(file_log_dir(Some("true"), None), Some("./logs".to_string()));
        assert_eq!(file_log_dir(Some("1"), Some("/var/log/words")), Some("/var/log/words".to_string()));
    }
}

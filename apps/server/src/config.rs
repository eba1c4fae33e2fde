use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use chrono_tz::Tz;
use streakwise_core::utils::time_utils::parse_timezone;

use crate::auth::{decode_secret_key, AuthConfig};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Zone whose calendar defines "today" for streaks and monthly stats.
    pub timezone: Tz,
    pub log_json: bool,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("SW_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid SW_LISTEN_ADDR")?;
        let db_path = env_or("SW_DB_PATH", "./db/app.db");
        let cors_allow = env_or("SW_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = parse_timeout_ms(&env_or("SW_REQUEST_TIMEOUT_MS", "30000"))
            .context("Invalid SW_REQUEST_TIMEOUT_MS")?;
        let timezone = parse_timezone(&env_or("SW_TIMEZONE", ""))
            .map_err(|e| anyhow::anyhow!("Invalid SW_TIMEZONE: {e}"))?;
        let log_json = env_or("SW_LOG_FORMAT", "text").eq_ignore_ascii_case("json");

        let secret = std::env::var("SW_JWT_SECRET").context("SW_JWT_SECRET must be set")?;
        let auth = AuthConfig {
            jwt_secret: decode_secret_key(&secret)?,
            issuer: std::env::var("SW_JWT_ISSUER")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            audience: env_or("SW_JWT_AUDIENCE", "authenticated"),
            leeway_secs: env_or("SW_JWT_LEEWAY_SECS", "5")
                .parse()
                .context("Invalid SW_JWT_LEEWAY_SECS")?,
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout,
            timezone,
            log_json,
            auth,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_timeout_ms(raw: &str) -> anyhow::Result<Duration> {
    let millis: u64 = raw.trim().parse()?;
    if millis == 0 {
        anyhow::bail!("timeout must be greater than zero");
    }
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_ms() {
        assert_eq!(parse_timeout_ms("30000").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout_ms(" 250 ").unwrap(), Duration::from_millis(250));
        assert!(parse_timeout_ms("soon").is_err());
        assert!(parse_timeout_ms("-5").is_err());
        assert!(parse_timeout_ms("0").is_err());
    }
}

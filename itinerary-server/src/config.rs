//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};

use crate::cache::CacheConfig;
use crate::otp::OtpConfig;

/// Error reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub otp: OtpConfig,
    pub cache: CacheConfig,
    pub listen_addr: SocketAddr,
    /// Offset used when formatting clock times for display.
    pub display_offset: FixedOffset,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognized variables: `OTP_BASE_URL`, `OTP_ROUTER`,
    /// `OTP_TIMEOUT_SECS`, `LISTEN_ADDR`, `CACHE_TTL_SECS`,
    /// `CACHE_MAX_CAPACITY`, `DISPLAY_UTC_OFFSET_MINUTES`. Unset variables
    /// take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut otp = match lookup("OTP_BASE_URL") {
            Some(url) => OtpConfig::new(url),
            None => OtpConfig::default(),
        };
        if let Some(router) = lookup("OTP_ROUTER") {
            otp = otp.with_router(router);
        }
        if let Some(secs) = parse(&lookup, "OTP_TIMEOUT_SECS")? {
            otp = otp.with_timeout(secs);
        }

        let mut cache = CacheConfig::default();
        if let Some(secs) = parse(&lookup, "CACHE_TTL_SECS")? {
            cache.ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) = parse(&lookup, "CACHE_MAX_CAPACITY")? {
            cache.max_capacity = capacity;
        }

        let listen_addr = match parse(&lookup, "LISTEN_ADDR")? {
            Some(addr) => addr,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let display_offset = match parse::<i32, _>(&lookup, "DISPLAY_UTC_OFFSET_MINUTES")? {
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| ConfigError::Invalid {
                    name: "DISPLAY_UTC_OFFSET_MINUTES",
                    value: minutes.to_string(),
                    reason: "offset must be less than 24 hours".into(),
                })?,
            None => Utc.fix(),
        };

        Ok(Self {
            otp,
            cache,
            listen_addr,
            display_offset,
        })
    }
}

fn parse<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>();
    parsed.map(Some).map_err(|e| ConfigError::Invalid {
        name,
        value,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.otp, OtpConfig::default());
        assert_eq!(config.cache, CacheConfig::default());
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.display_offset.local_minus_utc(), 0);
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            ("OTP_BASE_URL", "http://otp.internal:8080"),
            ("OTP_ROUTER", "portland"),
            ("OTP_TIMEOUT_SECS", "5"),
            ("LISTEN_ADDR", "0.0.0.0:8000"),
            ("CACHE_TTL_SECS", "30"),
            ("CACHE_MAX_CAPACITY", "50"),
            ("DISPLAY_UTC_OFFSET_MINUTES", "-420"),
        ])
        .unwrap();

        assert_eq!(
            config.otp.plan_url(),
            "http://otp.internal:8080/otp/routers/portland/plan"
        );
        assert_eq!(config.otp.timeout_secs, 5);
        assert_eq!(config.listen_addr.port(), 8000);
        assert_eq!(config.cache.ttl, Duration::from_secs(30));
        assert_eq!(config.cache.max_capacity, 50);
        assert_eq!(config.display_offset.local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn malformed_number_is_rejected() {
        let err = config(&[("CACHE_TTL_SECS", "soon")]).unwrap_err();

        let ConfigError::Invalid { name, value, .. } = err;
        assert_eq!(name, "CACHE_TTL_SECS");
        assert_eq!(value, "soon");
    }

    #[test]
    fn malformed_address_is_rejected() {
        assert!(config(&[("LISTEN_ADDR", "localhost")]).is_err());
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let err = config(&[("DISPLAY_UTC_OFFSET_MINUTES", "1440")]).unwrap_err();
        assert!(err.to_string().contains("DISPLAY_UTC_OFFSET_MINUTES"));
    }
}

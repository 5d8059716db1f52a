use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, DEFAULT_GREETING, DEFAULT_PORT, GREETING, HELLO_API_PORT,
    MAX_BODY_SIZE_BYTES, REQUEST_TIMEOUT_SECS, SHUTDOWN_TIMEOUT_SECS,
};

/// Settings of the service itself
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub greeting: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        let port = parse_or_default(HELLO_API_PORT, lookup(HELLO_API_PORT), default.port);

        // A blank greeting would make the endpoint look broken
        let greeting = lookup(GREETING)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default.greeting);

        Self { port, greeting }
    }
}

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        let request_timeout = parse_or_default(
            REQUEST_TIMEOUT_SECS,
            lookup(REQUEST_TIMEOUT_SECS),
            default.request_timeout.as_secs(),
        );

        let max_body_size =
            parse_or_default(MAX_BODY_SIZE_BYTES, lookup(MAX_BODY_SIZE_BYTES), default.max_body_size);

        let shutdown_timeout = parse_or_default(
            SHUTDOWN_TIMEOUT_SECS,
            lookup(SHUTDOWN_TIMEOUT_SECS),
            default.shutdown_timeout.as_secs(),
        );

        let cors_allowed_origins = lookup(CORS_ALLOWED_ORIGINS)
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(default.cors_allowed_origins);

        Self {
            request_timeout: Duration::from_secs(request_timeout),
            max_body_size,
            shutdown_timeout: Duration::from_secs(shutdown_timeout),
            cors_allowed_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_or_default<T>(env_var: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Display,
{
    match value {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                env_var = env_var,
                value = %value,
                default = %default,
                "ignoring invalid configuration value"
            );
            default
        }),
        None => default,
    }
}

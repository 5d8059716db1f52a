pub const SERVICE: &str = "hello-api";
pub const ENV: &str = "ENV";

pub const LOCAL_ENV: &str = "local";

pub const HELLO_API_PORT: &str = "HELLO_API_PORT";
pub const DEFAULT_PORT: u16 = 8080;

// Greeting configuration
pub const GREETING: &str = "GREETING";
pub const DEFAULT_GREETING: &str = "hello";

// Middleware configuration
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const MAX_BODY_SIZE_BYTES: &str = "MAX_BODY_SIZE_BYTES";
pub const SHUTDOWN_TIMEOUT_SECS: &str = "SHUTDOWN_TIMEOUT_SECS";

pub const REQUEST_ID_HEADER: &str = "x-request-id";

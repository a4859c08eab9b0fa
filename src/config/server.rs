/// HTTP server configuration constants.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "BATTLESHIPS_BIND";

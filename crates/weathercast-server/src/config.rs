//! Configuration for the weather API server binary.
//!
//! All configuration is loaded from environment variables; every variable
//! has a default so the server starts with no environment at all.

use weathercast_observer::ServerConfig;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("configuration error: {0}")]
    Invalid(String),
}

/// Load the server configuration from the environment.
///
/// Optional variables:
/// - `WEATHERCAST_HOST` -- bind address (default `0.0.0.0`)
/// - `WEATHERCAST_PORT` -- TCP port (default `8080`)
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when `WEATHERCAST_PORT` is not a
/// valid port number.
pub fn from_env() -> Result<ServerConfig, ConfigError> {
    let host = std::env::var("WEATHERCAST_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));

    let port: u16 = std::env::var("WEATHERCAST_PORT")
        .unwrap_or_else(|_| String::from("8080"))
        .parse()
        .map_err(|e| ConfigError::Invalid(format!("invalid WEATHERCAST_PORT: {e}")))?;

    Ok(ServerConfig { host, port })
}

#[cfg(test)]
mod tests {
    #[test]
    fn defaults_match_the_original_service() {
        // Verify the fallback values used in from_env.
        let port_default: u16 = "8080".parse().unwrap_or(0);
        assert_eq!(port_default, 8080);
    }
}

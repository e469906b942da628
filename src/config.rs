//! Configuration constants and port resolution.
//!
//! The service is configured entirely through the `PORT` environment variable
//! (optionally overridden on the command line). Everything else is a constant.

/// Service name used in the identity payload and as the access-log prefix.
pub const SERVICE_NAME: &str = "python-api";

/// Default TCP port when `PORT` is unset or not a valid integer.
pub const DEFAULT_PORT: u16 = 5100;

/// Environment variable holding the TCP port.
pub const PORT_ENV_VAR: &str = "PORT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "python_api=info";

/// Resolve the listen port with priority: CLI flag > `PORT` env > default.
///
/// A `PORT` value that does not parse as a `u16` falls back to the default
/// rather than aborting startup; a warning is logged so the misconfiguration
/// is visible.
pub fn resolve_port(cli: Option<u16>, env: Option<&str>) -> u16 {
    if let Some(port) = cli {
        return port;
    }

    match env {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_PORT,
                    "PORT is not a valid port number, using default"
                );
                DEFAULT_PORT
            }
        },
        None => DEFAULT_PORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_env_uses_default() {
        assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    }

    #[test]
    fn env_value_is_used() {
        assert_eq!(resolve_port(None, Some("8080")), 8080);
    }

    #[test]
    fn unparsable_env_falls_back_to_default() {
        assert_eq!(resolve_port(None, Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(resolve_port(None, Some("")), DEFAULT_PORT);
        assert_eq!(resolve_port(None, Some("70000")), DEFAULT_PORT);
    }

    #[test]
    fn cli_flag_overrides_env() {
        assert_eq!(resolve_port(Some(9000), Some("8080")), 9000);
        assert_eq!(resolve_port(Some(9000), None), 9000);
    }
}

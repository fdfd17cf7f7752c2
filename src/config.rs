use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Triagem";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address when `TRIAGEM_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Resolve the address the API server binds.
///
/// Priority:
/// 1. `TRIAGEM_ADDR` env var (explicit override)
/// 2. `127.0.0.1:8080`
///
/// An unparseable override logs a warning and falls back to the default.
pub fn bind_addr() -> SocketAddr {
    if let Ok(raw) = std::env::var("TRIAGEM_ADDR") {
        match raw.parse() {
            Ok(addr) => return addr,
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "Invalid TRIAGEM_ADDR, using default");
            }
        }
    }

    DEFAULT_ADDR.parse().expect("default bind address is valid")
}

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    "info,triagem=debug".to_string()
}

// src/config.rs
use std::sync::OnceLock;

/// Fallback origin when no other signal resolves.
pub const DEFAULT_DEV_API_ORIGIN: &str = "http://127.0.0.1:8000";

/// Port the Vite dev server listens on; when the client itself is served
/// from it, calls go through the dev proxy at a root-relative path.
const DEV_PROXY_PORT: &str = "5173";
const DEV_PROXY_PATH: &str = "/api";

/// Ambient signals the base-URL resolution reads, gathered into an
/// explicit value so resolution stays a pure function.
#[derive(Debug, Clone, Default)]
pub struct EnvSignals {
    /// Baked in at compile time.
    pub compiled: Option<String>,
    /// Late override injected into the process environment.
    pub runtime_override: Option<String>,
    /// Port the client is being served from, when known.
    pub dev_server_port: Option<String>,
}

impl EnvSignals {
    /// Snapshot of the real process environment. Missing variables are
    /// simply absent signals, never errors.
    pub fn from_process_env() -> Self {
        EnvSignals {
            compiled: option_env!("ATRUST_API_BASE_URL").map(str::to_string),
            runtime_override: std::env::var("ATRUST_API_BASE_URL_OVERRIDE").ok(),
            dev_server_port: std::env::var("ATRUST_DEV_SERVER_PORT").ok(),
        }
    }
}

/// Resolves the backend origin, first match wins:
///   1. compile-time value, if non-empty;
///   2. runtime override, if non-blank after trimming;
///   3. dev-proxy heuristic when served from the dev server port;
///   4. hardcoded local default.
/// Trailing slashes are stripped so paths can be appended verbatim.
pub fn resolve_api_base_url(signals: &EnvSignals) -> String {
    if let Some(compiled) = &signals.compiled {
        if !compiled.is_empty() {
            return compiled.trim_end_matches('/').to_string();
        }
    }

    if let Some(override_url) = &signals.runtime_override {
        let trimmed = override_url.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }

    if signals.dev_server_port.as_deref() == Some(DEV_PROXY_PORT) {
        return DEV_PROXY_PATH.to_string();
    }

    DEFAULT_DEV_API_ORIGIN.to_string()
}

/// Process-wide resolved base URL, computed once on first use.
pub fn api_base_url() -> &'static str {
    static BASE_URL: OnceLock<String> = OnceLock::new();
    BASE_URL.get_or_init(|| resolve_api_base_url(&EnvSignals::from_process_env()))
}

/// One-line diagnostic for connectivity trouble, pointing at the
/// resolved origin and its health endpoint.
pub fn connectivity_hint(base_url: &str) -> String {
    format!(
        "Backend base URL: {}. Ensure the scan API is running and /health is reachable.",
        base_url
    )
}

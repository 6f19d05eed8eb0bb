use std::path::PathBuf;
use std::time::Duration;

/// Client configuration shared by the library and the CLI.
///
/// Resolution order: defaults, then `FLIGHTDECK_*` environment variables,
/// then `--flag=value` arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the travel API (airlines, flights, bookings, loyalty...).
    pub api_base_url: String,

    /// Base URL of the profile service that serves `/auth/login`.
    pub profile_url: String,

    /// Base URL of the social API (posts).
    pub social_url: String,

    /// Path to the redb file holding token, user and loyalty selection.
    /// In-memory storage when unset.
    pub storage_path: Option<PathBuf>,

    /// Locale for notice wording (`en`, `id`).
    pub locale: String,

    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            profile_url: "http://localhost:8081/api".to_string(),
            social_url: "http://localhost:8082/api".to_string(),
            storage_path: None,
            locale: "en".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with command-line arguments.
    pub fn from_args(args: &[String]) -> Self {
        Self::default().apply_args(args)
    }

    /// Overlay values from an environment lookup.
    ///
    /// Supported variables:
    /// - `FLIGHTDECK_API_BASE_URL`
    /// - `FLIGHTDECK_PROFILE_URL`
    /// - `FLIGHTDECK_SOCIAL_URL`
    /// - `FLIGHTDECK_STORAGE`
    /// - `FLIGHTDECK_LOCALE`
    /// - `FLIGHTDECK_TIMEOUT_SECS`
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("FLIGHTDECK_API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = get("FLIGHTDECK_PROFILE_URL") {
            self.profile_url = v;
        }
        if let Some(v) = get("FLIGHTDECK_SOCIAL_URL") {
            self.social_url = v;
        }
        if let Some(v) = get("FLIGHTDECK_STORAGE") {
            self.storage_path = Some(PathBuf::from(v));
        }
        if let Some(v) = get("FLIGHTDECK_LOCALE") {
            self.locale = v;
        }
        if let Some(v) = get("FLIGHTDECK_TIMEOUT_SECS") {
            self.set_timeout(&v);
        }
        self
    }

    /// Overlay values from command-line arguments.
    ///
    /// Supported flags:
    /// - `--api=URL`
    /// - `--profile=URL`
    /// - `--social=URL`
    /// - `--storage=PATH`
    /// - `--locale=CODE`
    /// - `--timeout=SECS`
    pub fn apply_args(mut self, args: &[String]) -> Self {
        for arg in args {
            if let Some(val) = arg.strip_prefix("--api=") {
                self.api_base_url = val.to_string();
            } else if let Some(val) = arg.strip_prefix("--profile=") {
                self.profile_url = val.to_string();
            } else if let Some(val) = arg.strip_prefix("--social=") {
                self.social_url = val.to_string();
            } else if let Some(val) = arg.strip_prefix("--storage=") {
                self.storage_path = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--locale=") {
                self.locale = val.to_string();
            } else if let Some(val) = arg.strip_prefix("--timeout=") {
                self.set_timeout(val);
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn set_timeout(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => self.timeout_secs = secs,
            _ => tracing::warn!("Ignoring invalid timeout {:?}, keeping {}s", raw, self.timeout_secs),
        }
    }
}

//! Provider configuration for cloudplane.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `cloudplane_core::ProviderConfig`.

pub mod logging;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use cloudplane_core::{Endpoints, Experiment, ProviderConfig, TlsVerification, WaitSettings};

pub const DEFAULT_DNS_ENDPOINT: &str = "https://dns.api.cloudplane.cloud";
pub const DEFAULT_IAAS_ENDPOINT: &str = "https://iaas.api.cloudplane.cloud";

/// Environment prefix for config overrides, e.g. `CLOUDPLANE_DEFAULT_PROFILE`.
/// Nested keys use `__`: `CLOUDPLANE_PROFILES__DEV__REGION`.
pub const ENV_PREFIX: &str = "CLOUDPLANE_";

/// Token fallback when the profile names no variable of its own.
pub const TOKEN_ENV: &str = "CLOUDPLANE_SERVICE_ACCOUNT_TOKEN";

const KEYRING_SERVICE: &str = "cloudplane";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_wait_throttle")]
    pub wait_throttle_secs: u64,

    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_secs: u64,

    #[serde(default)]
    pub insecure: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            wait_throttle_secs: default_wait_throttle(),
            wait_timeout_secs: default_wait_timeout(),
            insecure: false,
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_wait_throttle() -> u64 {
    WaitSettings::default().throttle.as_secs()
}
fn default_wait_timeout() -> u64 {
    WaitSettings::default().timeout.as_secs()
}

/// A named provider profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// DNS API base URL; the public endpoint when unset.
    pub dns_endpoint: Option<String>,

    /// IaaS API base URL, serving both stable and experimental networks.
    pub iaas_endpoint: Option<String>,

    /// Default region for region-scoped APIs.
    pub region: Option<String>,

    /// Service account token (plaintext, prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable holding the token.
    pub token_env: Option<String>,

    /// Opt-in experiments, e.g. `["network"]`.
    #[serde(default)]
    pub experiments: Vec<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    pub insecure: Option<bool>,

    pub timeout: Option<u64>,

    pub wait_throttle_secs: Option<u64>,

    pub wait_timeout_secs: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("cloud", "cloudplane", "cloudplane").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("cloudplane");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full config from the canonical file plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Defaults, then the TOML file at `path` (if present), then `CLOUDPLANE_*`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    Ok(figment.extract()?)
}

/// Load config, falling back to defaults when it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile selection ───────────────────────────────────────────────

/// Pick `name`, else the configured default profile.
pub fn select_profile<'a>(
    cfg: &'a Config,
    name: Option<&'a str>,
) -> Result<(&'a str, &'a Profile), ConfigError> {
    let name = name
        .or(cfg.default_profile.as_deref())
        .unwrap_or("default");
    cfg.profiles
        .get(name)
        .map(|profile| (name, profile))
        .ok_or_else(|| ConfigError::Validation {
            field: "profile".into(),
            reason: format!("no profile named '{name}'"),
        })
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the service account token.
///
/// Order: the profile's `token_env` variable, `CLOUDPLANE_SERVICE_ACCOUNT_TOKEN`,
/// the system keyring (`cloudplane` / `{profile}/token`), plaintext `token`.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(val) = std::env::var(TOKEN_ENV) {
        return Ok(SecretString::from(val));
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a token in the system keyring for `profile_name`.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token"))
        .and_then(|entry| entry.set_password(token))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Translation ─────────────────────────────────────────────────────

fn parse_endpoint(field: &str, value: Option<&str>, fallback: &str) -> Result<url::Url, ConfigError> {
    let raw = value.unwrap_or(fallback);
    raw.parse().map_err(|_| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Build a `ProviderConfig` from a profile, filling gaps from `defaults`.
pub fn profile_to_provider_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ProviderConfig, ConfigError> {
    let endpoints = Endpoints {
        dns: parse_endpoint(
            "dns_endpoint",
            profile.dns_endpoint.as_deref(),
            DEFAULT_DNS_ENDPOINT,
        )?,
        iaas: parse_endpoint(
            "iaas_endpoint",
            profile.iaas_endpoint.as_deref(),
            DEFAULT_IAAS_ENDPOINT,
        )?,
    };

    let experiments =
        Experiment::parse_all(&profile.experiments).map_err(|reason| ConfigError::Validation {
            field: "experiments".into(),
            reason,
        })?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let token = resolve_token(profile, profile_name)?;

    let mut config = ProviderConfig::new(token, endpoints);
    config.region.clone_from(&profile.region);
    config.experiments = experiments;
    config.tls = tls;
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    config.wait = WaitSettings {
        throttle: Duration::from_secs(
            profile
                .wait_throttle_secs
                .unwrap_or(defaults.wait_throttle_secs),
        ),
        timeout: Duration::from_secs(
            profile
                .wait_timeout_secs
                .unwrap_or(defaults.wait_timeout_secs),
        ),
    };
    Ok(config)
}

/// Load config and build the `ProviderConfig` for `profile` (or the default).
pub fn load_provider_config(profile: Option<&str>) -> Result<ProviderConfig, ConfigError> {
    let cfg = load_config()?;
    let (name, selected) = select_profile(&cfg, profile)?;
    profile_to_provider_config(selected, name, &cfg.defaults)
}

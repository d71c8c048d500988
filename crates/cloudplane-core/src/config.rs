// ── Runtime provider configuration ──
//
// These types describe how the provider reaches the control plane.
// They carry the credential and transport tuning but never touch disk:
// `cloudplane-config` resolves profiles and hands a `ProviderConfig` in.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use strum::{AsRefStr, Display, EnumString};
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification. Only for local test endpoints.
    DangerAcceptInvalid,
}

/// Opt-in switches for API surfaces that are not yet stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Experiment {
    /// Region-scoped networks through the IaaS v2alpha API.
    Network,
}

impl Experiment {
    /// Parse a list of experiment names, rejecting unknown ones.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>, String> {
        names
            .iter()
            .map(|n| {
                let name = n.as_ref().trim();
                Self::from_str(name).map_err(|_| format!("unknown experiment {name:?}"))
            })
            .collect()
    }
}

/// Base URLs of the control-plane services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub dns: Url,
    /// Serves both the stable (v1) and experimental (v2alpha) IaaS APIs.
    pub iaas: Url,
}

/// Poll cadence for asynchronous operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    pub throttle: Duration,
    pub timeout: Duration,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            throttle: cloudplane_api::wait::DEFAULT_THROTTLE,
            timeout: cloudplane_api::wait::DEFAULT_TIMEOUT,
        }
    }
}

/// Configuration for one provider instance.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Service account bearer token.
    pub token: SecretString,
    pub endpoints: Endpoints,
    /// Default region for region-scoped APIs.
    pub region: Option<String>,
    pub experiments: Vec<Experiment>,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    pub wait: WaitSettings,
}

impl ProviderConfig {
    /// Config with default transport and wait settings.
    pub fn new(token: SecretString, endpoints: Endpoints) -> Self {
        Self {
            token,
            endpoints,
            region: None,
            experiments: Vec::new(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            wait: WaitSettings::default(),
        }
    }

    pub fn has_experiment(&self, experiment: Experiment) -> bool {
        self.experiments.contains(&experiment)
    }
}

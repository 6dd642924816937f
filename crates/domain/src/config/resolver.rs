use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use super::errors::ConfigError;

const DEFAULT_DNS_PORT: u16 = 53;

/// Where lookups are sent
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamProvider {
    /// Host configuration (`/etc/resolv.conf`)
    #[default]
    System,

    Google,

    Cloudflare,

    Quad9,

    /// Name servers listed in `nameservers`
    Custom,
}

impl UpstreamProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Google => "google",
            Self::Cloudflare => "cloudflare",
            Self::Quad9 => "quad9",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for UpstreamProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "google" => Ok(Self::Google),
            "cloudflare" => Ok(Self::Cloudflare),
            "quad9" => Ok(Self::Quad9),
            "custom" => Ok(Self::Custom),
            other => Err(ConfigError::Validation(format!(
                "Unknown upstream '{}' (expected system, google, cloudflare, quad9 or custom)",
                other
            ))),
        }
    }
}

/// Resolver settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub upstream: UpstreamProvider,

    /// `ip` or `ip:port` entries, used when `upstream = "custom"`
    #[serde(default)]
    pub nameservers: Vec<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream: UpstreamProvider::default(),
            nameservers: Vec::new(),
            timeout_ms: default_timeout_ms(),
            attempts: default_attempts(),
        }
    }
}

impl ResolverConfig {
    /// Parse `nameservers` into socket addresses, defaulting the port to 53.
    pub fn nameserver_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.nameservers
            .iter()
            .map(|entry| parse_nameserver(entry))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.attempts == 0 {
            return Err(ConfigError::Validation(
                "Resolver attempts cannot be 0".to_string(),
            ));
        }

        if self.upstream == UpstreamProvider::Custom && self.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "Custom upstream requires at least one nameserver".to_string(),
            ));
        }

        self.nameserver_addrs()?;
        Ok(())
    }
}

/// Parse `"192.0.2.53"`, `"192.0.2.53:5353"` or `"[2001:db8::53]:53"`.
pub fn parse_nameserver(entry: &str) -> Result<SocketAddr, ConfigError> {
    let entry = entry.trim();

    if let Ok(addr) = entry.parse::<SocketAddr>() {
        return Ok(addr);
    }

    entry
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid nameserver address: {}", entry)))
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_attempts() -> usize {
    2
}

//! Demo configuration
//!
//! Configuration is loaded from a `.toml` or `.json` file, then overridden by
//! `PATTERNS_*` environment variables, then validated. Every field has a
//! default that reproduces the stock demos, so an empty file is valid.

use crate::errors::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// What an approval chain does with a request no handler accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnhandledPolicy {
    /// Drop the request without output
    #[default]
    Silent,
    /// Surface `PatternError::UnhandledRequest`
    Reject,
}

impl FromStr for UnhandledPolicy {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "reject" => Ok(Self::Reject),
            other => Err(PatternError::invalid(format!(
                "Unknown unhandled policy '{other}' (expected silent or reject)"
            ))),
        }
    }
}

/// Loan approval chain settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Highest amount a junior officer approves
    pub junior_limit: f64,
    /// Highest amount a senior officer approves
    pub senior_limit: f64,
    /// Behaviour for requests nobody approves
    pub unhandled: UnhandledPolicy,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            junior_limit: 10_000.0,
            senior_limit: 50_000.0,
            unhandled: UnhandledPolicy::Silent,
        }
    }
}

/// Report proxy settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Simulated cost of one uncached report, in milliseconds
    pub report_delay_ms: u64,
}

/// Payment adapter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Rupees per dollar used by the multi-currency wrapper
    pub inr_per_usd: f64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self { inr_per_usd: 80.0 }
    }
}

/// A named role: direct permissions plus included roles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleDefinition {
    pub name: String,
    pub permissions: Vec<String>,
    /// Names of roles nested inside this one, in display order
    pub includes: Vec<String>,
}

impl RoleDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    pub fn with_include(mut self, role: impl Into<String>) -> Self {
        self.includes.push(role.into());
        self
    }
}

/// Permission tree settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    /// Role whose tree is displayed
    pub root: String,
    pub roles: Vec<RoleDefinition>,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            root: "Admin".to_string(),
            roles: vec![
                RoleDefinition::new("Editor")
                    .with_permission("READ")
                    .with_permission("WRITE"),
                RoleDefinition::new("Admin")
                    .with_include("Editor")
                    .with_permission("DELETE"),
            ],
        }
    }
}

/// Top-level configuration for all demos
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternsConfig {
    pub chain: ChainConfig,
    pub proxy: ProxyConfig,
    pub adapter: AdapterConfig,
    pub composite: CompositeConfig,
}

impl PatternsConfig {
    /// Load configuration from a file, choosing the format by extension
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PatternError::config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(PatternError::config(format!(
                    "Unsupported config format: {}",
                    path.display()
                )))
            }
        };
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from an optional file, apply environment overrides and validate
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PATTERNS_*` overrides from the process environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply `PATTERNS_*` overrides from an explicit variable list
    pub fn merge_with_vars<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                "PATTERNS_UNHANDLED" => self.chain.unhandled = value.parse()?,
                "PATTERNS_JUNIOR_LIMIT" => {
                    self.chain.junior_limit = parse_var(&key, &value)?;
                }
                "PATTERNS_SENIOR_LIMIT" => {
                    self.chain.senior_limit = parse_var(&key, &value)?;
                }
                "PATTERNS_REPORT_DELAY_MS" => {
                    self.proxy.report_delay_ms = parse_var(&key, &value)?;
                }
                "PATTERNS_INR_PER_USD" => {
                    self.adapter.inr_per_usd = parse_var(&key, &value)?;
                }
                _ => continue,
            }
            tracing::debug!(%key, "applied environment override");
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let chain = &self.chain;
        if !chain.junior_limit.is_finite() || !chain.senior_limit.is_finite() {
            return Err(PatternError::invalid("Chain limits must be finite"));
        }
        if chain.junior_limit >= chain.senior_limit {
            return Err(PatternError::invalid(format!(
                "junior_limit ({}) must be below senior_limit ({})",
                chain.junior_limit, chain.senior_limit
            )));
        }
        if !(self.adapter.inr_per_usd.is_finite() && self.adapter.inr_per_usd > 0.0) {
            return Err(PatternError::invalid("inr_per_usd must be positive"));
        }
        if self.composite.root.is_empty() {
            return Err(PatternError::invalid("composite.root cannot be empty"));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| PatternError::invalid(format!("Invalid value '{value}' in {key}")))
}

//! Process-wide runtime configuration.
//!
//! The exported entry points read this once per process from the
//! environment. Hosts embedding the Rust API build it directly.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{RuntimeError, RuntimeResult};

/// Environment variable selecting [`MalformedInputPolicy`].
pub const MALFORMED_INPUT_ENV: &str = "MINILANG_MALFORMED_INPUT";

/// What `read_input` does with a token that is not an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedInputPolicy {
    /// Discard the token and report it; the C entry point returns `0`.
    #[default]
    Zero,
    /// Discard the token and keep reading until an integer or end of input.
    Skip,
}

impl MalformedInputPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            MalformedInputPolicy::Zero => "zero",
            MalformedInputPolicy::Skip => "skip",
        }
    }
}

impl fmt::Display for MalformedInputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MalformedInputPolicy {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(MalformedInputPolicy::Zero),
            "skip" => Ok(MalformedInputPolicy::Skip),
            other => Err(RuntimeError::invalid_config(format!(
                "{MALFORMED_INPUT_ENV}={other:?} (expected \"zero\" or \"skip\")"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub malformed_input: MalformedInputPolicy,
}

impl RuntimeConfig {
    pub fn from_env() -> RuntimeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RuntimeResult<Self> {
        let malformed_input = match lookup(MALFORMED_INPUT_ENV) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => MalformedInputPolicy::default(),
        };
        Ok(RuntimeConfig { malformed_input })
    }
}

/// Configuration used by the exported C entry points.
///
/// An invalid environment value is logged and replaced by the default.
pub fn process_config() -> RuntimeConfig {
    static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
    *CONFIG.get_or_init(|| {
        RuntimeConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("{e}; using defaults");
            RuntimeConfig::default()
        })
    })
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access-policy configuration
//!
//! The only policy the core reads from configuration is the ownership
//! predicate's admin-bypass knob. Shipping it as configuration (rather than a
//! hard-coded choice per call site) is deliberate: the bypass decision is a
//! product decision, and it applies uniformly or not at all.

use crate::authz::{AdminBypass, OwnershipPolicy};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or parsing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Access configuration, parsed from TOML.
///
/// ```toml
/// admin_bypass = false
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AccessConfig {
    /// When true, admin callers bypass the teacher-ownership check on writes.
    pub admin_bypass: bool,
}

impl AccessConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn ownership_policy(&self) -> OwnershipPolicy {
        OwnershipPolicy {
            admin_bypass: if self.admin_bypass {
                AdminBypass::Enabled
            } else {
                AdminBypass::Disabled
            },
        }
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{DEFAULT_KUBECONFIG, KUBECONFIG_ENV};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Connection configuration resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Kubeconfig file the client is built from
    pub kubeconfig_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var_os(KUBECONFIG_ENV).map(PathBuf::from))
    }

    /// Use the override when it is set and non-empty, otherwise the expanded default path
    pub fn resolve(kubeconfig_override: Option<PathBuf>) -> Result<Self> {
        let kubeconfig_path = match kubeconfig_override.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => path,
            None => expand_path(DEFAULT_KUBECONFIG)?,
        };

        Ok(Config { kubeconfig_path })
    }
}

/// Expand a leading `~` to the current user's home directory.
///
/// Paths that do not start with `~` are returned unchanged. `~user` forms
/// are rejected.
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    if !rest.is_empty() && !rest.starts_with(['/', '\\']) {
        return Err(Error::HomeDirExpansion(path.to_string()));
    }

    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

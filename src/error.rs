// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Cannot expand user-specific home dir: {0}")]
    HomeDirExpansion(String),

    #[error("Home directory could not be determined")]
    NoHomeDir,

    #[error("Timed out after {timeout:?} waiting for {description}")]
    Timeout {
        description: String,
        timeout: Duration,
    },

    #[error("Pod {namespace}/{name} is in unknown state")]
    PodUnknown { namespace: String, name: String },

    #[error("No pods in {namespace} with selector {selector}")]
    NoPodsMatched { namespace: String, selector: String },

    #[error("{kind} has no metadata.name")]
    MissingName { kind: String },

    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl Error {
    /// True when the API server answered 404 for the requested object
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Kube(kube::Error::Api(err)) if err.code == 404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

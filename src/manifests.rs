// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed objects loaded from YAML manifests on disk

use crate::error::{Error, Result};
use k8s_openapi::api::core::v1::{ConfigMap, Pod, Secret};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Read a YAML manifest into `K`.
///
/// Fails when the file holds a different `apiVersion`/`kind` than `K`.
pub fn load_manifest<K: DeserializeOwned>(path: impl AsRef<Path>) -> Result<K> {
    let path = path.as_ref();
    debug!("Loading manifest {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| Error::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&contents).map_err(|source| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn pod_from_yaml(path: impl AsRef<Path>) -> Result<Pod> {
    load_manifest(path)
}

pub fn config_map_from_yaml(path: impl AsRef<Path>) -> Result<ConfigMap> {
    load_manifest(path)
}

pub fn secret_from_yaml(path: impl AsRef<Path>) -> Result<Secret> {
    load_manifest(path)
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client handle creation from a resolved kubeconfig

use crate::config::Config;
use crate::error::{Error, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig, Resource};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Handle to a cluster used by end-to-end tests.
///
/// Built once and reused for every operation; cloning shares the underlying
/// connection.
#[derive(Clone)]
pub struct KubeCtl {
    client: Client,
    config: KConfig,
    kubeconfig_path: Option<PathBuf>,
}

impl KubeCtl {
    /// Connect using the kubeconfig named by the environment, or the default one
    pub async fn connect() -> Result<Self> {
        let config = Config::from_env()?;
        Self::connect_with(&config).await
    }

    /// Connect using the kubeconfig file named in `config`
    #[instrument(skip(config), fields(kubeconfig = %config.kubeconfig_path.display()))]
    pub async fn connect_with(config: &Config) -> Result<Self> {
        let path = &config.kubeconfig_path;

        let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
            Error::Kubeconfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let client_config =
            KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|e| Error::Kubeconfig(format!("Failed to create config: {}", e)))?;

        let client = Client::try_from(client_config.clone())
            .map_err(|e| Error::Kubeconfig(format!("Failed to create client: {}", e)))?;

        info!("Connected to Kubernetes cluster at {}", client_config.cluster_url);

        Ok(Self {
            client,
            config: client_config,
            kubeconfig_path: Some(path.clone()),
        })
    }

    /// Wrap an existing client and the configuration it was built from
    pub fn new(client: Client, config: KConfig) -> Self {
        Self {
            client,
            config,
            kubeconfig_path: None,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn kube_config(&self) -> &KConfig {
        &self.config
    }

    /// File the handle was loaded from; `None` for handles built with [`KubeCtl::new`]
    pub fn kubeconfig_path(&self) -> Option<&Path> {
        self.kubeconfig_path.as_deref()
    }
}

/// Name of an object about to be replaced
pub(crate) fn object_name<K>(obj: &K) -> Result<String>
where
    K: Resource<DynamicType = ()>,
{
    obj.meta().name.clone().ok_or_else(|| Error::MissingName {
        kind: K::kind(&()).to_string(),
    })
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::client::{object_name, KubeCtl};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    core::ObjectList,
    Api, ResourceExt,
};
use tracing::{info, instrument};

impl KubeCtl {
    fn config_maps(&self, namespace: &str) -> Api<ConfigMap> {
        Api::namespaced(self.client().clone(), namespace)
    }

    #[instrument(skip(self, config_map), fields(config_map = %config_map.name_any()))]
    pub async fn create_config_map(
        &self,
        namespace: &str,
        config_map: &ConfigMap,
    ) -> Result<ConfigMap> {
        info!("Creating config map {}/{}", namespace, config_map.name_any());
        Ok(self
            .config_maps(namespace)
            .create(&PostParams::default(), config_map)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_config_map(&self, namespace: &str, name: &str) -> Result<ConfigMap> {
        Ok(self.config_maps(namespace).get(name).await?)
    }

    #[instrument(skip(self, config_map), fields(config_map = %config_map.name_any()))]
    pub async fn update_config_map(
        &self,
        namespace: &str,
        config_map: &ConfigMap,
    ) -> Result<ConfigMap> {
        let name = object_name(config_map)?;
        info!("Updating config map {}/{}", namespace, name);
        Ok(self
            .config_maps(namespace)
            .replace(&name, &PostParams::default(), config_map)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn list_config_maps(&self, namespace: &str) -> Result<ObjectList<ConfigMap>> {
        Ok(self
            .config_maps(namespace)
            .list(&ListParams::default())
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_config_map(&self, namespace: &str, name: &str) -> Result<()> {
        info!("Deleting config map {}/{}", namespace, name);
        self.config_maps(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }
}

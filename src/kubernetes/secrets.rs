// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::client::{object_name, KubeCtl};
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    core::ObjectList,
    Api, ResourceExt,
};
use tracing::{info, instrument};

impl KubeCtl {
    fn secrets(&self, namespace: &str) -> Api<Secret> {
        Api::namespaced(self.client().clone(), namespace)
    }

    #[instrument(skip(self, secret), fields(secret = %secret.name_any()))]
    pub async fn create_secret(&self, namespace: &str, secret: &Secret) -> Result<Secret> {
        info!("Creating secret {}/{}", namespace, secret.name_any());
        Ok(self
            .secrets(namespace)
            .create(&PostParams::default(), secret)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret> {
        Ok(self.secrets(namespace).get(name).await?)
    }

    #[instrument(skip(self, secret), fields(secret = %secret.name_any()))]
    pub async fn update_secret(&self, namespace: &str, secret: &Secret) -> Result<Secret> {
        let name = object_name(secret)?;
        Ok(self
            .secrets(namespace)
            .replace(&name, &PostParams::default(), secret)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn list_secrets(&self, namespace: &str) -> Result<ObjectList<Secret>> {
        Ok(self.secrets(namespace).list(&ListParams::default()).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_secret(&self, namespace: &str, name: &str) -> Result<()> {
        info!("Deleting secret {}/{}", namespace, name);
        self.secrets(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }
}

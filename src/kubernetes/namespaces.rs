// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management and teardown

use crate::constants::NAMESPACE_NAME_LABEL;
use crate::error::Result;
use crate::kubernetes::client::{object_name, KubeCtl};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    Api, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Build a namespace labelled with its own name
pub fn namespace_object(name: &str, annotations: BTreeMap<String, String>) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(BTreeMap::from([(
                NAMESPACE_NAME_LABEL.to_string(),
                name.to_string(),
            )])),
            annotations: Some(annotations),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl KubeCtl {
    fn namespaces(&self) -> Api<Namespace> {
        Api::all(self.client().clone())
    }

    #[instrument(skip(self, annotations))]
    pub async fn create_namespace(
        &self,
        name: &str,
        annotations: BTreeMap<String, String>,
    ) -> Result<Namespace> {
        info!("Creating namespace {}", name);
        let ns = namespace_object(name, annotations);
        Ok(self.namespaces().create(&PostParams::default(), &ns).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_namespace(&self, name: &str) -> Result<Namespace> {
        Ok(self.namespaces().get(name).await?)
    }

    #[instrument(skip(self, namespace), fields(namespace = %namespace.name_any()))]
    pub async fn update_namespace(&self, namespace: &Namespace) -> Result<Namespace> {
        let name = object_name(namespace)?;
        Ok(self
            .namespaces()
            .replace(&name, &PostParams::default(), namespace)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn list_namespaces(&self) -> Result<ObjectList<Namespace>> {
        Ok(self.namespaces().list(&ListParams::default()).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_namespace(&self, name: &str) -> Result<()> {
        info!("Deleting namespace {}", name);
        self.namespaces()
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }

    /// Delete every pod in the namespace, then the namespace itself.
    ///
    /// Each pod deletion waits for the pod to disappear. Stops at the first
    /// failure, leaving the remaining pods and the namespace in place.
    #[instrument(skip(self))]
    pub async fn teardown_namespace(&self, namespace: &str) -> Result<()> {
        let pods = self.get_pod_names(namespace).await?;
        info!("Tearing down namespace {} ({} pods)", namespace, pods.len());

        for pod in &pods {
            self.delete_pod(namespace, pod).await?;
        }

        self.delete_namespace(namespace).await
    }
}

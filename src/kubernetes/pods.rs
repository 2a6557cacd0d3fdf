// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod operations and the waits built on pod state

use crate::constants::{POD_TERMINATION_TIMEOUT, POLL_INTERVAL};
use crate::error::{Error, Result};
use crate::kubernetes::client::{object_name, KubeCtl};
use crate::types::PodPhase;
use crate::wait::poll_immediate;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    core::ObjectList,
    Api, ResourceExt,
};
use std::time::Duration;
use tracing::{debug, info, instrument, trace};

impl KubeCtl {
    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client().clone(), namespace)
    }

    #[instrument(skip(self, pod), fields(pod = %pod.name_any()))]
    pub async fn create_pod(&self, namespace: &str, pod: &Pod) -> Result<Pod> {
        info!("Creating pod {}/{}", namespace, pod.name_any());
        Ok(self.pods(namespace).create(&PostParams::default(), pod).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod> {
        Ok(self.pods(namespace).get(name).await?)
    }

    #[instrument(skip(self, pod), fields(pod = %pod.name_any()))]
    pub async fn update_pod(&self, namespace: &str, pod: &Pod) -> Result<Pod> {
        let name = object_name(pod)?;
        Ok(self
            .pods(namespace)
            .replace(&name, &PostParams::default(), pod)
            .await?)
    }

    /// All pods in the namespace
    #[instrument(skip(self))]
    pub async fn get_pods(&self, namespace: &str) -> Result<ObjectList<Pod>> {
        Ok(self.pods(namespace).list(&ListParams::default()).await?)
    }

    /// Pods in the namespace matching the label selector
    #[instrument(skip(self))]
    pub async fn list_pods(&self, namespace: &str, selector: &str) -> Result<ObjectList<Pod>> {
        let lp = ListParams::default().labels(selector);
        Ok(self.pods(namespace).list(&lp).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_pod_names(&self, namespace: &str) -> Result<Vec<String>> {
        let pods = self.get_pods(namespace).await?;
        Ok(pods.items.iter().map(|p| p.name_any()).collect())
    }

    /// Delete a pod and wait until it is gone from the namespace
    #[instrument(skip(self))]
    pub async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()> {
        info!("Deleting pod {}/{}", namespace, name);
        self.pods(namespace)
            .delete(name, &DeleteParams::default())
            .await?;

        self.wait_for_pod_terminated(namespace, name, POD_TERMINATION_TIMEOUT)
            .await
    }

    /// Whether the pod currently reports `phase`.
    ///
    /// Fails if the pod cannot be read or reports the `Unknown` phase.
    pub async fn is_pod_in_phase(
        &self,
        namespace: &str,
        name: &str,
        phase: PodPhase,
    ) -> Result<bool> {
        let pod = self.get_pod(namespace, name).await?;

        match PodPhase::of(&pod) {
            Some(current) if current == phase => Ok(true),
            Some(PodPhase::Unknown) => Err(Error::PodUnknown {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
            current => {
                trace!("Pod {}/{} is {:?}, waiting for {}", namespace, name, current, phase);
                Ok(false)
            }
        }
    }

    /// Whether the pod no longer appears in the namespace's pod listing
    pub async fn is_pod_absent(&self, namespace: &str, name: &str) -> Result<bool> {
        let names = self.get_pod_names(namespace).await?;
        Ok(!names.iter().any(|n| n == name))
    }

    #[instrument(skip(self))]
    pub async fn wait_for_pod_terminated(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        let description = format!("pod {}/{} to terminate", namespace, name);
        poll_immediate(POLL_INTERVAL, timeout, &description, || {
            self.is_pod_absent(namespace, name)
        })
        .await?;

        debug!("Pod {}/{} is gone", namespace, name);
        Ok(())
    }

    /// Poll until the pod reports `phase`, failing fast on `Unknown`
    #[instrument(skip(self))]
    pub async fn wait_for_pod_phase(
        &self,
        namespace: &str,
        name: &str,
        phase: PodPhase,
        timeout: Duration,
    ) -> Result<()> {
        let description = format!("pod {}/{} to be {}", namespace, name, phase);
        poll_immediate(POLL_INTERVAL, timeout, &description, || {
            self.is_pod_in_phase(namespace, name, phase)
        })
        .await?;

        debug!("Pod {}/{} is {}", namespace, name, phase);
        Ok(())
    }

    pub async fn wait_for_pod_running(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        self.wait_for_pod_phase(namespace, name, PodPhase::Running, timeout)
            .await
    }

    pub async fn wait_for_pod_pending(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        self.wait_for_pod_phase(namespace, name, PodPhase::Pending, timeout)
            .await
    }

    pub async fn wait_for_pod_succeeded(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        self.wait_for_pod_phase(namespace, name, PodPhase::Succeeded, timeout)
            .await
    }

    pub async fn wait_for_pod_failed(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        self.wait_for_pod_phase(namespace, name, PodPhase::Failed, timeout)
            .await
    }

    /// Wait for every pod matching `selector` to be running.
    ///
    /// Pods are waited on one after another, each with the full timeout.
    /// Fails if the selector matches nothing.
    #[instrument(skip(self))]
    pub async fn wait_for_pods_by_selector_running(
        &self,
        namespace: &str,
        selector: &str,
        timeout: Duration,
    ) -> Result<()> {
        let pods = self.list_pods(namespace, selector).await?;
        if pods.items.is_empty() {
            return Err(Error::NoPodsMatched {
                namespace: namespace.to_string(),
                selector: selector.to_string(),
            });
        }

        for pod in &pods.items {
            self.wait_for_pod_running(namespace, &pod.name_any(), timeout)
                .await?;
        }

        Ok(())
    }
}

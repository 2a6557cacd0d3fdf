// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::kubernetes::client::KubeCtl;
use k8s_openapi::api::core::v1::Service;
use kube::Api;
use tracing::instrument;

impl KubeCtl {
    #[instrument(skip(self))]
    pub async fn get_service(&self, namespace: &str, name: &str) -> Result<Service> {
        let services: Api<Service> = Api::namespaced(self.client().clone(), namespace);
        Ok(services.get(name).await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::MockService;

    #[tokio::test]
    async fn test_get_service() {
        let body = serde_json::json!({
            "apiVersion": "v1",
            "kind": "Service",
            "metadata": { "name": "scheduler", "namespace": "e2e" },
            "spec": { "clusterIP": "10.0.0.12", "ports": [{ "port": 9080 }] }
        });
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/e2e/services/scheduler",
            200,
            &body.to_string(),
        );
        let kubectl = mock.into_kubectl();

        let service = kubectl.get_service("e2e", "scheduler").await.unwrap();

        let spec = service.spec.unwrap();
        assert_eq!(spec.cluster_ip.as_deref(), Some("10.0.0.12"));
        assert_eq!(spec.ports.unwrap()[0].port, 9080);
    }
}

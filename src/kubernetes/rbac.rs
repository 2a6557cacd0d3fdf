// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service accounts and the cluster role bindings that grant them access

use crate::constants::rbac::{API_GROUP, CLUSTER_ROLE_KIND, SERVICE_ACCOUNT_KIND};
use crate::error::Result;
use crate::kubernetes::client::{object_name, KubeCtl};
use k8s_openapi::api::core::v1::ServiceAccount;
use k8s_openapi::api::rbac::v1::{ClusterRoleBinding, RoleRef, Subject};
use kube::{
    api::{DeleteParams, ListParams, ObjectMeta, PostParams},
    core::ObjectList,
    Api, ResourceExt,
};
use tracing::{info, instrument};

pub fn service_account_object(name: &str) -> ServiceAccount {
    ServiceAccount {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bind `role` to a single service account in `namespace`
pub fn cluster_role_binding_object(
    binding_name: &str,
    role: &str,
    namespace: &str,
    service_account: &str,
) -> ClusterRoleBinding {
    ClusterRoleBinding {
        metadata: ObjectMeta {
            name: Some(binding_name.to_string()),
            ..Default::default()
        },
        subjects: Some(vec![Subject {
            kind: SERVICE_ACCOUNT_KIND.to_string(),
            name: service_account.to_string(),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        }]),
        role_ref: RoleRef {
            api_group: API_GROUP.to_string(),
            kind: CLUSTER_ROLE_KIND.to_string(),
            name: role.to_string(),
        },
    }
}

impl KubeCtl {
    fn service_accounts(&self, namespace: &str) -> Api<ServiceAccount> {
        Api::namespaced(self.client().clone(), namespace)
    }

    fn cluster_role_bindings(&self) -> Api<ClusterRoleBinding> {
        Api::all(self.client().clone())
    }

    #[instrument(skip(self))]
    pub async fn create_service_account(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceAccount> {
        info!("Creating service account {}/{}", namespace, name);
        Ok(self
            .service_accounts(namespace)
            .create(&PostParams::default(), &service_account_object(name))
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_service_account(&self, namespace: &str, name: &str) -> Result<ServiceAccount> {
        Ok(self.service_accounts(namespace).get(name).await?)
    }

    #[instrument(skip(self, account), fields(account = %account.name_any()))]
    pub async fn update_service_account(
        &self,
        namespace: &str,
        account: &ServiceAccount,
    ) -> Result<ServiceAccount> {
        let name = object_name(account)?;
        Ok(self
            .service_accounts(namespace)
            .replace(&name, &PostParams::default(), account)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn list_service_accounts(
        &self,
        namespace: &str,
    ) -> Result<ObjectList<ServiceAccount>> {
        Ok(self
            .service_accounts(namespace)
            .list(&ListParams::default())
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_service_account(&self, namespace: &str, name: &str) -> Result<()> {
        info!("Deleting service account {}/{}", namespace, name);
        self.service_accounts(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn create_cluster_role_binding(
        &self,
        binding_name: &str,
        role: &str,
        namespace: &str,
        service_account: &str,
    ) -> Result<ClusterRoleBinding> {
        info!(
            "Binding cluster role {} to service account {}/{}",
            role, namespace, service_account
        );
        let binding = cluster_role_binding_object(binding_name, role, namespace, service_account);
        Ok(self
            .cluster_role_bindings()
            .create(&PostParams::default(), &binding)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_cluster_role_binding(&self, name: &str) -> Result<ClusterRoleBinding> {
        Ok(self.cluster_role_bindings().get(name).await?)
    }

    #[instrument(skip(self, binding), fields(binding = %binding.name_any()))]
    pub async fn update_cluster_role_binding(
        &self,
        binding: &ClusterRoleBinding,
    ) -> Result<ClusterRoleBinding> {
        let name = object_name(binding)?;
        Ok(self
            .cluster_role_bindings()
            .replace(&name, &PostParams::default(), binding)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn list_cluster_role_bindings(&self) -> Result<ObjectList<ClusterRoleBinding>> {
        Ok(self
            .cluster_role_bindings()
            .list(&ListParams::default())
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_cluster_role_binding(&self, name: &str) -> Result<()> {
        info!("Deleting cluster role binding {}", name);
        self.cluster_role_bindings()
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }
}

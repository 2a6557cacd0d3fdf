// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;

/// Environment variable overriding the kubeconfig location
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Kubeconfig location used when the environment does not name one
pub const DEFAULT_KUBECONFIG: &str = "~/.kube/config";

/// Label set on every namespace created by the helpers
pub const NAMESPACE_NAME_LABEL: &str = "Name";

/// Interval between condition checks while waiting on pods
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on waiting for a deleted pod to leave its namespace
pub const POD_TERMINATION_TIMEOUT: Duration = Duration::from_secs(60);

/// RBAC identifiers used when binding service accounts to cluster roles
pub mod rbac {
    pub const API_GROUP: &str = "rbac.authorization.k8s.io";
    pub const CLUSTER_ROLE_KIND: &str = "ClusterRole";
    pub const SERVICE_ACCOUNT_KIND: &str = "ServiceAccount";
}

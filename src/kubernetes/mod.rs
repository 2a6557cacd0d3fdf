// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The `KubeCtl` handle and its resource operations, grouped by resource kind.

pub mod client;
pub mod config_maps;
pub mod namespaces;
pub mod pods;
pub mod rbac;
pub mod secrets;
pub mod services;

pub use client::KubeCtl;
pub use namespaces::namespace_object;
pub use rbac::{cluster_role_binding_object, service_account_object};

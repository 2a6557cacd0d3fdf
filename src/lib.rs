// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod logging;
pub mod manifests;
pub mod types;
pub mod wait;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use kubernetes::KubeCtl;
pub use types::PodPhase;

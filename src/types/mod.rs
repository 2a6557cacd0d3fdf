// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed views over values the API reports as plain strings.

pub mod pod_phase;

pub use pod_phase::PodPhase;

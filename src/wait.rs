// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Condition polling with an immediate first check.

use crate::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval_at, timeout, Instant, MissedTickBehavior};
use tracing::trace;

/// Poll `check` until it returns `Ok(true)`.
///
/// The first check runs immediately and always to completion; `limit` only
/// bounds the later checks, which run every `poll_interval`. An error from
/// `check` is returned as-is and stops polling. When `limit` elapses first,
/// fails with [`Error::Timeout`] carrying `description`.
pub async fn poll_immediate<F, Fut>(
    poll_interval: Duration,
    limit: Duration,
    description: &str,
    mut check: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    trace!(attempt = 1u32, "Checking {}", description);
    if check().await? {
        return Ok(());
    }

    let mut ticker = interval_at(Instant::now() + poll_interval, poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let attempts = async {
        let mut attempt = 1u32;
        loop {
            ticker.tick().await;
            attempt += 1;
            trace!(attempt, "Checking {}", description);
            if check().await? {
                return Ok::<(), Error>(());
            }
        }
    };

    match timeout(limit, attempts).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            description: description.to_string(),
            timeout: limit,
        }),
    }
}

use std::time::Duration;

use crate::{
    error::{Result, WallgenError},
    luma::GenerationApi,
    models::{GenerationHandle, GenerationState},
};

pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const MAX_POLL_ATTEMPTS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }
}

/// Poll a generation until it reaches a terminal state.
///
/// Issues at most `policy.max_attempts` status requests and sleeps between
/// them without blocking the runtime. The remote job is left alone on
/// timeout. A handle is only returned once it is `completed`.
pub async fn poll_until_complete(
    api: &dyn GenerationApi,
    api_key: &str,
    id: &str,
    policy: &PollPolicy,
) -> Result<GenerationHandle> {
    for attempt in 1..=policy.max_attempts {
        let handle = api.get(api_key, id).await?;

        match &handle.state {
            GenerationState::Completed => {
                log::info!("Generation {} completed after {} poll(s)", id, attempt);
                return Ok(handle);
            }
            GenerationState::Failed => {
                let reason = handle
                    .failure_reason
                    .unwrap_or_else(|| "unknown reason".to_string());
                log::error!("Generation {} failed: {}", id, reason);
                return Err(WallgenError::GenerationFailed(reason));
            }
            GenerationState::Pending(state) => {
                log::info!(
                    "Generation {} is {} (attempt {}/{})",
                    id,
                    state,
                    attempt,
                    policy.max_attempts
                );
            }
        }

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }

    log::warn!(
        "Generation {} still pending after {} attempts",
        id,
        policy.max_attempts
    );
    Err(WallgenError::PollTimeout)
}

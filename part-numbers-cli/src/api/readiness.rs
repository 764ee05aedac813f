//! Wait for the service to report healthy before talking to it

use super::client::PartNumbersClient;
use crate::config::ReadinessConfig;
use crate::loader::LoadError;

/// Poll the health endpoint until it answers successfully
///
/// Returns the attempt number that succeeded.
pub async fn wait_until_ready(
    client: &PartNumbersClient,
    config: &ReadinessConfig,
) -> Result<u32, LoadError> {
    let max_attempts = config.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        match client.health().await {
            Ok(health) => {
                log::info!(
                    "Service ready after {} attempt(s): status={} database={}",
                    attempt,
                    health.status,
                    health.database.as_deref().unwrap_or("unknown")
                );
                return Ok(attempt);
            }
            Err(e) => {
                log::debug!("Readiness attempt {}/{} failed: {}", attempt, max_attempts, e);
                last_error = e.to_string();
            }
        }

        if attempt < max_attempts {
            tokio::time::sleep(config.delay_for(attempt)).await;
        }
    }

    log::warn!(
        "Service at {} never became ready ({} attempts)",
        client.config().base_url,
        max_attempts
    );

    Err(LoadError::NotReady {
        attempts: max_attempts,
        last_error,
    })
}

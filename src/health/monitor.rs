//! Periodic health probe against the computation service.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::config::{DownstreamConfig, HealthCheckConfig};
use crate::observability::metrics;

/// Background prober for the computation service's `/health` endpoint.
pub struct HealthMonitor {
    client: reqwest::Client,
    endpoint: String,
    config: HealthCheckConfig,
}

impl HealthMonitor {
    /// Build a monitor from the downstream address and probe settings.
    pub fn new(
        downstream: &DownstreamConfig,
        config: HealthCheckConfig,
    ) -> Result<Self, reqwest::Error> {
        let endpoint = format!(
            "{}/{}",
            downstream.base_url.trim_end_matches('/'),
            config.path.trim_start_matches('/')
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// Probe on an interval until the shutdown signal fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if !self.config.enabled {
            tracing::info!("Downstream health probe disabled");
            return;
        }

        tracing::info!(
            endpoint = %self.endpoint,
            interval = self.config.interval_secs,
            "Health monitor starting"
        );

        let mut ticker = time::interval(Duration::from_secs(self.config.interval_secs));
        let mut last_state: Option<bool> = None;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let up = self.probe().await;
                    metrics::record_downstream_health(up);

                    if last_state != Some(up) {
                        if up {
                            tracing::info!(endpoint = %self.endpoint, "Computation service is up");
                        } else {
                            tracing::warn!(endpoint = %self.endpoint, "Computation service is down");
                        }
                        last_state = Some(up);
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("Health monitor received shutdown signal, exiting");
                    break;
                }
            }
        }
    }

    async fn probe(&self) -> bool {
        match self.client.get(&self.endpoint).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Health probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let downstream = DownstreamConfig::default();
        let monitor = HealthMonitor::new(&downstream, HealthCheckConfig::default()).unwrap();
        assert_eq!(monitor.endpoint, "http://127.0.0.1:5001/health");
    }
}

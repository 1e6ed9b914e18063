//! Builds the runtime and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::{PcgRng, RngOracle};
use runtime::Runtime;

use crate::config::BotConfig;

/// Builder that assembles the runtime and configuration for clients.
pub struct RuntimeBuilder {
    config: BotConfig,
    rng: Arc<dyn RngOracle>,
}

impl RuntimeBuilder {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            rng: Arc::new(PcgRng),
        }
    }

    /// Provide a custom spawn oracle (e.g. a fixed one for demos).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Arc::new(rng);
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let runtime_config = self.config.runtime_config();
        tracing::debug!(
            tick_interval_ms = runtime_config.tick_interval.as_millis() as u64,
            seeded = runtime_config.seed.is_some(),
            "Building runtime"
        );

        let runtime = Runtime::builder()
            .config(runtime_config)
            .rng(self.rng)
            .build()
            .await
            .context("failed to build runtime")?;

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: BotConfig,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{FixedRng, OwnerId};
    use runtime::{NullSink, StartAck};

    #[tokio::test(start_paused = true)]
    async fn builds_a_runtime_from_config() {
        let mut config = BotConfig::new(7);
        config.seed = Some(3);

        let setup = RuntimeBuilder::new(config)
            .rng(FixedRng(2))
            .build()
            .await
            .unwrap();
        let handle = setup.runtime.handle();
        assert_eq!(handle.config().seed, Some(3));

        let session = handle
            .open_session(OwnerId(1), "hunter", Arc::new(NullSink))
            .await
            .unwrap();
        assert_eq!(session.start().await.unwrap(), StartAck::Started);

        tokio::time::sleep(std::time::Duration::from_millis(2_100)).await;
        let snapshot = session.snapshot().await.unwrap();
        assert_eq!(snapshot.monster.unwrap().kind, "Goblin");
    }
}

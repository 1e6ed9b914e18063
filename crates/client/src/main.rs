//! Hunting bot binary.
//!
//! Composition root: loads configuration, installs logging, builds the
//! runtime and hands it to the selected frontend.
//!
//! ```bash
//! HUNT_CHANNEL_ID=1 cargo run -p hunt-client
//! ```
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{BotConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, logging};
    use client_frontend_core::{ChannelId, GatewayConfig};
    use hunt_client::Client;

    let config = BotConfig::from_env()?;
    let cli_config = CliConfig::from_env();

    let _log_guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    tracing::info!(bot = %cli_config.bot_name, channel = config.channel_id, "Logged in");
    tracing::debug!(
        prefix = %config.command_prefix,
        tick_interval_ms = config.tick_interval.as_millis() as u64,
        eviction_grace_secs = config.eviction_grace.as_secs(),
        token_present = config.token.is_some(),
        "Bot configuration loaded"
    );

    let setup = RuntimeBuilder::new(config).build().await?;
    let gateway_config = GatewayConfig::new(
        ChannelId(setup.config.channel_id),
        setup.config.command_prefix.clone(),
    );
    let frontend = CliFrontend::new(gateway_config, cli_config);

    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

use taskboard_server::config::ServerConfig;
use taskboard_server::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = ServerConfig::from_env()?;
    tracing::info!(address = %config.socket_addr(), "configuration loaded");

    taskboard_server::run(config).await
}

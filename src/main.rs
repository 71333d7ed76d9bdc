use anyhow::Result;
use shortenme::{config, server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("APP_ENV").as_deref() != Ok("production") {
        dotenvy::dotenv().ok();
    }

    let config = config::load_from_env()?;

    telemetry::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}

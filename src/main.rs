use log::LevelFilter;
use weather_clock::api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_module("weather_clock", LevelFilter::Info)
        .parse_default_env()
        .init();

    api::start().await?;

    Ok(())
}

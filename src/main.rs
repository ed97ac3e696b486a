use anyhow::Result;
use uvmap::{UvMapConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = UvMapConfig::load()?;
    logging::init(&config.logging)?;

    web::run(&config).await
}

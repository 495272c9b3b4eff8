mod config;
mod resolver;
mod tg_api;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ResolverConfig;
use crate::resolver::{TelegramSource, TokioSleeper, resolve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ResolverConfig::default();
    tracing::info!("Waiting for the first message to the bot");

    let mut source = TelegramSource::new(&config)?;
    let chat = resolve(&mut source, &mut TokioSleeper, config.backoff).await;

    println!();
    println!(
        "Save this chat id ({}) and replace it in your bot config.",
        chat.id
    );
    Ok(())
}

//! Polls getUpdates until some user has messaged the bot

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ResolverConfig;
use crate::tg_api::{Update, UpdateResponse};

/// Shown when the message carries no usable sender name.
const NO_NAME: &str = "Unknown";

/// Chat discovered from the first user message seen by the poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChat {
    pub id: i64,
    pub first_name: String,
}

/// What one polling round produced.
#[derive(Debug)]
pub enum PollOutcome {
    Found(ResolvedChat),
    /// Non-empty batch, but only service updates in it.
    NoMessage,
    Empty,
    Failed(anyhow::Error),
}

/// What the loop does with an outcome.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Done(ResolvedChat),
    RetryNow,
    RetryAfter(Duration),
}

/// Scans a batch in arrival order and stops at the first real message.
pub fn first_message(updates: Vec<Update>) -> PollOutcome {
    if updates.is_empty() {
        return PollOutcome::Empty;
    }
    for update in updates {
        if let Some(msg) = update.message {
            let first_name = msg
                .from
                .and_then(|user| user.first_name)
                .unwrap_or_else(|| NO_NAME.to_string());
            return PollOutcome::Found(ResolvedChat {
                id: msg.chat.id,
                first_name,
            });
        }
    }
    PollOutcome::NoMessage
}

/// Retry policy, kept apart from the I/O so it can be tested as a plain
/// function. Failures and empty batches wait out the back-off; a batch of
/// service updates is re-polled right away.
pub fn next_step(outcome: PollOutcome, backoff: Duration) -> Step {
    match outcome {
        PollOutcome::Found(chat) => Step::Done(chat),
        PollOutcome::NoMessage => Step::RetryNow,
        PollOutcome::Empty | PollOutcome::Failed(_) => Step::RetryAfter(backoff),
    }
}

#[async_trait]
pub trait UpdateSource {
    async fn fetch(&mut self) -> anyhow::Result<UpdateResponse>;
}

#[async_trait]
pub trait Sleeper {
    async fn sleep(&mut self, duration: Duration);
}

pub struct TelegramSource {
    client: Client,
    url: String,
}

impl TelegramSource {
    pub fn new(config: &ResolverConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(TelegramSource {
            client,
            url: config.updates_url(),
        })
    }
}

#[async_trait]
impl UpdateSource for TelegramSource {
    async fn fetch(&mut self) -> anyhow::Result<UpdateResponse> {
        Ok(self.client.get(&self.url).send().await?.json().await?)
    }
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

/// Polls until the first user message turns up, then hands back its chat.
/// Transport failures and empty batches are reported and retried, never
/// returned, so the only way out is success.
pub async fn resolve(
    source: &mut impl UpdateSource,
    sleeper: &mut impl Sleeper,
    backoff: Duration,
) -> ResolvedChat {
    loop {
        let outcome = match source.fetch().await {
            Ok(response) => first_message(response.result),
            Err(e) => PollOutcome::Failed(e),
        };
        report(&outcome);
        match next_step(outcome, backoff) {
            Step::Done(chat) => return chat,
            Step::RetryNow => {}
            Step::RetryAfter(pause) => sleeper.sleep(pause).await,
        }
    }
}

fn report(outcome: &PollOutcome) {
    match outcome {
        PollOutcome::Found(chat) => {
            tracing::info!("{}'s chat id = {}", chat.first_name, chat.id)
        }
        PollOutcome::NoMessage => tracing::debug!("Only service updates in this batch"),
        PollOutcome::Empty => {
            tracing::info!("No new messages yet. Ask the new owner to send /start to the bot")
        }
        PollOutcome::Failed(e) => tracing::error!(?e, "when getting updates"),
    }
}

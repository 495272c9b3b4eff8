//! Fixed configuration for one discovery run

use std::time::Duration;

/// Token of the bot being handed over. Paste yours here before running.
const BOT_TOKEN: &str = "0000000000:REPLACE-WITH-YOUR-BOT-TOKEN";

const API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub token: String,
    pub api_base: String,
    pub request_timeout: Duration,
    pub backoff: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            token: BOT_TOKEN.to_string(),
            api_base: API_BASE.to_string(),
            request_timeout: Duration::from_secs(10),
            backoff: Duration::from_secs(5),
        }
    }
}

impl ResolverConfig {
    pub fn updates_url(&self) -> String {
        format!("{}/bot{}/getUpdates", self.api_base, self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_url_puts_the_token_in_the_path() {
        let config = ResolverConfig {
            token: "123:abc".to_string(),
            ..ResolverConfig::default()
        };
        assert_eq!(
            config.updates_url(),
            "https://api.telegram.org/bot123:abc/getUpdates"
        );
    }
}

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error};

use crate::error::{Error, Result};

pub const TELEGRAM_API: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Clone)]
pub struct TelegramService {
    client: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramService {
    pub fn new(api_base: String, bot_token: String, chat_id: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client for Telegram API");

        Self {
            client,
            api_base,
            bot_token,
            chat_id,
        }
    }

    /// Sends `text` to the configured chat. Delivery is best effort: any
    /// failure is logged and swallowed, so a broken bot transport never
    /// stops the polling loop. Callers that need delivery guarantees must
    /// not rely on this alone.
    pub async fn notify(&self, text: &str) {
        match self.send_message(text).await {
            Ok(()) => debug!("Bot sent message: {}", text),
            Err(e) => error!("{}", e),
        }
    }

    async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Notify(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reply = response.text().await.unwrap_or_default();
            return Err(Error::Notify(format!("{} - {}", status, reply)));
        }

        Ok(())
    }
}

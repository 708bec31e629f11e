use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::services::practicum_service::PracticumService;
use crate::services::review_service;
use crate::services::telegram_service::TelegramService;

/// Pause between poll iterations. Runs unconditionally, even after a failed
/// iteration, and is the only retry pacing there is.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

pub struct Poller {
    practicum: PracticumService,
    telegram: TelegramService,
    cursor: i64,
    last_message: String,
}

impl Poller {
    pub fn new(practicum: PracticumService, telegram: TelegramService) -> Self {
        Self {
            practicum,
            telegram,
            cursor: Utc::now().timestamp(),
            last_message: String::new(),
        }
    }

    pub async fn run(&mut self) {
        info!(
            "Polling homework statuses every {}s",
            RETRY_PERIOD.as_secs()
        );
        loop {
            self.run_once().await;
            tokio::time::sleep(RETRY_PERIOD).await;
        }
    }

    /// One poll iteration: fetch, validate, translate, notify. Errors from
    /// the polling phase are reported to the chat (once per distinct fault
    /// text) and never escape, so the loop outlives any transient failure.
    pub async fn run_once(&mut self) {
        match self.poll().await {
            Ok(Some(message)) => {
                if message != self.last_message {
                    self.telegram.notify(&message).await;
                    self.last_message = message;
                } else {
                    debug!("Status unchanged, duplicate message suppressed");
                }
            }
            Ok(None) => debug!("No homework updates since {}", self.cursor),
            Err(e) => {
                error!("{}", e);
                let message = format!("Сбой в работе программы: {}", e);
                if message != self.last_message {
                    self.telegram.notify(&message).await;
                }
                self.last_message = message;
            }
        }

        self.cursor = Utc::now().timestamp();
    }

    // Only the first (most recent) record is inspected; older updates in
    // the same reply are skipped on purpose.
    async fn poll(&self) -> Result<Option<String>> {
        let response = self.practicum.fetch(self.cursor).await?;
        let homeworks = review_service::check_response(&response)?;
        match homeworks.first() {
            Some(homework) => Ok(Some(review_service::parse_status(homework)?)),
            None => Ok(None),
        }
    }
}

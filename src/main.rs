use homework_bot::config::Config;
use homework_bot::services::poll_service::Poller;
use homework_bot::services::practicum_service::{PracticumService, ENDPOINT};
use homework_bot::services::telegram_service::{TelegramService, TELEGRAM_API};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(missing) => {
            for name in &missing {
                error!("Missing required environment variable: '{}'", name);
            }
            error!("Bot cannot start without credentials, shutting down");
            std::process::exit(1);
        }
    };

    let practicum = PracticumService::new(config.practicum_token.clone(), ENDPOINT.to_string());
    let telegram = TelegramService::new(
        TELEGRAM_API.to_string(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );

    info!("Homework status bot started");
    Poller::new(practicum, telegram).run().await;
}

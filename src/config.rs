use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    /// Reads the three required secrets from the environment (`.env`
    /// supported). An empty value counts as missing. On failure returns the
    /// names of every missing variable so startup can report them all at
    /// once.
    pub fn from_env() -> std::result::Result<Self, Vec<&'static str>> {
        dotenv().ok();

        let mut missing = Vec::new();
        let practicum_token = get_env("PRACTICUM_TOKEN", &mut missing);
        let telegram_token = get_env("TELEGRAM_TOKEN", &mut missing);
        let telegram_chat_id = get_env("TELEGRAM_CHAT_ID", &mut missing);

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

fn get_env(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

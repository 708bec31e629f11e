pub type Result<T> = std::result::Result<T, Error>;

// Display texts are Russian because the poll loop embeds them verbatim in
// the chat fault message; `Notify` is the one kind that stays log-only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Сервис недоступен: {0}")]
    Connection(reqwest::Error),

    #[error("Эндпоинт {url} недоступен (from_date={from_date}): {reason}")]
    Endpoint {
        url: String,
        from_date: i64,
        reason: String,
    },

    #[error("Ответ получен в некорректном формате: {0}")]
    TypeMismatch(&'static str),

    #[error("Отсутствует ключ '{0}' в ответе")]
    MissingKey(&'static str),

    #[error("Получен несуществующий статус домашней работы: '{0}'")]
    UnknownStatus(String),

    #[error("Ошибка отправки сообщения ботом: {0}")]
    Notify(String),
}

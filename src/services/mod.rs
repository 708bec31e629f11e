pub mod poll_service;
pub mod practicum_service;
pub mod review_service;
pub mod telegram_service;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::homework::HomeworkStatus;

/// Checks the decoded API reply against the documented contract and
/// extracts the homework list. An empty list is a valid "no update" reply.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let object = response
        .as_object()
        .ok_or(Error::TypeMismatch("ожидался объект"))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(Error::MissingKey("homeworks"))?;

    // `current_date` is never read downstream; its presence is still part
    // of the API contract.
    if !object.contains_key("current_date") {
        return Err(Error::MissingKey("current_date"));
    }

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(Error::TypeMismatch("'homeworks' должен быть списком"))
}

/// Renders the chat message for a single homework record. The phrasing
/// (including the missing separator after the period) matches what
/// recipients already expect.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(Error::MissingKey("homework_name"))?;

    let raw_status = homework.get("status").ok_or(Error::MissingKey("status"))?;
    let status = raw_status
        .as_str()
        .ok_or_else(|| Error::UnknownStatus(raw_status.to_string()))
        .and_then(HomeworkStatus::parse)?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\".{}",
        name,
        status.verdict()
    ))
}

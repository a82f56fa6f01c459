use crate::error::{GatewayError, Result};
use crate::interfaces::xml;
use serde::Deserialize;
use serde_json::Value;

/// Answer of the SMS service.
///
/// The service replies with JSON; an XML body carrying the same elements is
/// accepted as well. `error_code` keeps the code as sent, whether it arrived
/// as a number or a string.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub error_code: String,
    pub error_message: Option<String>,
    /// Remaining SMS quota.
    pub count: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAnswer {
    #[serde(default)]
    error_code: Value,
    error_message: Option<String>,
    count: Option<i64>,
}

pub fn decode(body: &str) -> Result<NotificationResponse> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('<') {
        return xml::decode(trimmed);
    }
    let answer: JsonAnswer = serde_json::from_str(trimmed)?;
    let error_code = match answer.error_code {
        Value::Null => return Err(GatewayError::Decode("errorCode is missing".to_owned())),
        Value::String(code) => code,
        other => other.to_string(),
    };
    Ok(NotificationResponse {
        error_code,
        error_message: answer.error_message,
        count: answer.count,
    })
}

use serde_json::Value;
use thiserror::Error;

/// Failure talking to the AussieEat API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Backend unreachable: {0}")]
    Transport(String),

    #[error("Backend did not answer in time")]
    Timeout,

    #[error("Unexpected backend response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Pulls a readable message out of an error body.
///
/// Accepts `{"detail": "..."}`, a validation list `{"detail": [{"msg": ..}]}`
/// joined by spaces, `{"message": "..."}` or a bare string; otherwise `fallback`.
pub fn extract_error_message(body: &Value, fallback: &str) -> String {
    match body {
        Value::String(text) if !text.is_empty() => return text.clone(),
        Value::Object(map) => {
            match map.get("detail") {
                Some(Value::String(detail)) => return detail.clone(),
                Some(Value::Array(items)) => {
                    let joined = items
                        .iter()
                        .map(detail_item_text)
                        .collect::<Vec<_>>()
                        .join(" ");
                    let joined = joined.trim();
                    return if joined.is_empty() {
                        fallback.to_string()
                    } else {
                        joined.to_string()
                    };
                }
                Some(Value::Null) | None => {}
                Some(other) => return other.to_string(),
            }

            if let Some(Value::String(message)) = map.get("message") {
                return message.clone();
            }
        }
        _ => {}
    }

    fallback.to_string()
}

fn detail_item_text(item: &Value) -> String {
    match item {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("msg") {
            Some(Value::String(msg)) => msg.clone(),
            Some(msg) => msg.to_string(),
            None => item.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_string_wins() {
        let body = json!({"detail": "Order not found", "message": "ignored"});
        assert_eq!(extract_error_message(&body, "fallback"), "Order not found");
    }

    #[test]
    fn validation_list_is_joined() {
        let body = json!({"detail": [
            {"loc": ["body", "rating"], "msg": "Input should be less than or equal to 5"},
            {"msg": "Field required"},
            null
        ]});
        assert_eq!(
            extract_error_message(&body, "fallback"),
            "Input should be less than or equal to 5 Field required"
        );
    }

    #[test]
    fn empty_list_falls_back() {
        assert_eq!(
            extract_error_message(&json!({"detail": []}), "Unable to login"),
            "Unable to login"
        );
    }

    #[test]
    fn message_and_bare_string() {
        assert_eq!(
            extract_error_message(&json!({"message": "Nope"}), "fallback"),
            "Nope"
        );
        assert_eq!(
            extract_error_message(&json!("plain text"), "fallback"),
            "plain text"
        );
        assert_eq!(extract_error_message(&json!(null), "fallback"), "fallback");
        assert_eq!(extract_error_message(&json!({}), "fallback"), "fallback");
    }

    #[test]
    fn object_detail_is_rendered_as_json() {
        let body = json!({"detail": {"code": 7}});
        assert_eq!(extract_error_message(&body, "fallback"), r#"{"code":7}"#);
    }
}

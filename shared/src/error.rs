use serde_json::Value;
use thiserror::Error;

/// Shown when a registration fails and the server gave nothing better
pub const REGISTRATION_FAILED_MESSAGE: &str = "Ocorreu um erro ao tentar realizar o cadastro";
/// Shown for a 400 whose body carries no usable message
pub const INVALID_DATA_MESSAGE: &str = "Dados inválidos. Verifique os campos e tente novamente.";

/// Body of a non-2xx response
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Empty,
    Text(String),
    Json(Value),
}

impl ErrorBody {
    /// Classify a raw response body. JSON string literals count as text,
    /// anything that is not JSON is kept verbatim.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ErrorBody::Empty;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Null) => ErrorBody::Empty,
            Ok(Value::String(message)) if message.is_empty() => ErrorBody::Empty,
            Ok(Value::String(message)) => ErrorBody::Text(message),
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(text.to_string()),
        }
    }

    fn string_field(&self, name: &str) -> Option<&str> {
        match self {
            ErrorBody::Json(Value::Object(map)) => map
                .get(name)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty()),
            _ => None,
        }
    }
}

/// Failure of a call to the remote API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, body: ErrorBody },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message to show after a failed registration.
    ///
    /// Priority: a plain string body, then the body's `message`, then its
    /// `title`, then the invalid-data message for a 400 that carried a body, then the
    /// generic one.
    pub fn registration_message(&self) -> String {
        let ApiError::Status { status, body } = self else {
            return REGISTRATION_FAILED_MESSAGE.to_string();
        };

        if let ErrorBody::Text(text) = body {
            if !text.is_empty() {
                return text.clone();
            }
        }

        if let Some(message) = body.string_field("message") {
            return message.to_string();
        }

        if let Some(title) = body.string_field("title") {
            return title.to_string();
        }

        if *status == 400 && !matches!(body, ErrorBody::Empty) {
            return INVALID_DATA_MESSAGE.to_string();
        }

        REGISTRATION_FAILED_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(status: u16, body: &str) -> ApiError {
        ApiError::Status { status, body: ErrorBody::from_text(body) }
    }

    #[test]
    fn test_error_body_classification() {
        assert_eq!(ErrorBody::from_text(""), ErrorBody::Empty);
        assert_eq!(ErrorBody::from_text("  null "), ErrorBody::Empty);
        assert_eq!(
            ErrorBody::from_text("Email já cadastrado"),
            ErrorBody::Text("Email já cadastrado".to_string())
        );
        assert_eq!(
            ErrorBody::from_text(r#""Email já cadastrado""#),
            ErrorBody::Text("Email já cadastrado".to_string())
        );
        assert_eq!(
            ErrorBody::from_text(r#"{"title":"Bad"}"#),
            ErrorBody::Json(json!({"title": "Bad"}))
        );
    }

    #[test]
    fn test_registration_message_prefers_string_body() {
        let error = status(409, "Email já cadastrado");
        assert_eq!(error.registration_message(), "Email já cadastrado");
    }

    #[test]
    fn test_registration_message_uses_message_then_title() {
        let error = status(400, r#"{"message":"Senha fraca","title":"Bad Request"}"#);
        assert_eq!(error.registration_message(), "Senha fraca");

        let error = status(400, r#"{"title":"One or more validation errors occurred."}"#);
        assert_eq!(error.registration_message(), "One or more validation errors occurred.");
    }

    #[test]
    fn test_registration_message_for_bare_400() {
        assert_eq!(status(400, r#"{"errors":{}}"#).registration_message(), INVALID_DATA_MESSAGE);
    }

    #[test]
    fn test_registration_message_for_empty_400() {
        assert_eq!(status(400, "").registration_message(), REGISTRATION_FAILED_MESSAGE);
        assert_eq!(status(400, "null").registration_message(), REGISTRATION_FAILED_MESSAGE);
        assert_eq!(status(400, r#""""#).registration_message(), REGISTRATION_FAILED_MESSAGE);
    }

    #[test]
    fn test_registration_message_generic_fallbacks() {
        assert_eq!(status(500, "").registration_message(), REGISTRATION_FAILED_MESSAGE);
        assert_eq!(
            ApiError::Network("offline".into()).registration_message(),
            REGISTRATION_FAILED_MESSAGE
        );
        assert_eq!(
            status(500, r#"{"message":""}"#).registration_message(),
            REGISTRATION_FAILED_MESSAGE
        );
    }
}

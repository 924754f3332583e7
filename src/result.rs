use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_json::Value;

/// Uniform service envelope: an error flag, an HTTP-style status code and a
/// payload (domain data on success, human-readable message on failure).
///
/// Business failures travel inside this envelope with `error: true`;
/// infrastructure failures never do, they propagate as `anyhow::Error` and get
/// mapped to 500 at the handler.
#[derive(Debug, Clone)]
pub struct ServiceResult {
    pub error: bool,
    pub status_code: StatusCode,
    pub value: Value,
}

impl ServiceResult {
    pub fn ok<T: Serialize>(value: T) -> Self {
        Self {
            error: false,
            status_code: StatusCode::OK,
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }

    pub fn created<T: Serialize>(value: T) -> Self {
        Self {
            error: false,
            status_code: StatusCode::CREATED,
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: true,
            status_code: StatusCode::BAD_REQUEST,
            value: Value::String(message.into()),
        }
    }

    pub fn bad_request_all(messages: Vec<String>) -> Self {
        Self {
            error: true,
            status_code: StatusCode::BAD_REQUEST,
            value: Value::Array(messages.into_iter().map(Value::String).collect()),
        }
    }

}

impl Serialize for ServiceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ServiceResult", 3)?;
        s.serialize_field("error", &self.error)?;
        s.serialize_field("status", &self.status_code.as_u16())?;
        s.serialize_field("value", &self.value)?;
        s.end()
    }
}

impl IntoResponse for ServiceResult {
    fn into_response(self) -> Response {
        let status = self.status_code;
        (status, Json(self)).into_response()
    }
}

/// Maps an infrastructure error to a 500 at the handler boundary.
pub fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!(error = %e, "internal error");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_serializes_flag_status_and_value() {
        let result = ServiceResult::ok("a-token");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["error"], false);
        assert_eq!(json["status"], 200);
        assert_eq!(json["value"], "a-token");
    }

    #[test]
    fn bad_request_envelope_carries_the_message() {
        let result = ServiceResult::bad_request("Order Invalid");
        assert!(result.error);
        assert_eq!(result.status_code, StatusCode::BAD_REQUEST);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["value"], "Order Invalid");
    }

    #[test]
    fn bad_request_all_keeps_message_order() {
        let result = ServiceResult::bad_request_all(vec!["first".into(), "second".into()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["value"][0], "first");
        assert_eq!(json["value"][1], "second");
    }
}

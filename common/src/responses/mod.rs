use serde::{Deserialize, Serialize};

/// Outcome kind reported in every acknowledgment body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// JSON body returned by `POST /submit`, e.g. `{"status":"ok","message":"Response saved!"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: Status,
    pub message: String,
}

impl SubmitResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_lowercase_status() {
        let body = serde_json::to_string(&SubmitResponse::ok("Response saved!")).unwrap();
        assert_eq!(body, r#"{"status":"ok","message":"Response saved!"}"#);

        let body = serde_json::to_value(SubmitResponse::error("No data received")).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "No data received");
    }
}

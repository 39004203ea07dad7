use serde::Serialize;

/// The JSON envelope shared by every endpoint:
/// `{"status": "success" | "fail" | "error", "message"?, "data"?}`.
#[derive(Serialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub(crate) status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn from_data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

impl ApiResponse<()> {
    pub fn from_message(message: &str) -> Self {
        Self {
            status: "success",
            message: Some(message.to_string()),
            data: None,
        }
    }

    pub fn fail(message: String) -> Self {
        Self {
            status: "fail",
            message: Some(message),
            data: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error",
            message: Some(message),
            data: None,
        }
    }
}

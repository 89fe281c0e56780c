use serde::Serialize;

/// API error response. `message` is what the site's client shows.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Success envelope for mutations: a message plus the affected record.
#[derive(Serialize, Debug)]
pub struct ApiMessage<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiMessage<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self { message: message.to_string(), data: Some(data) }
    }
}

impl ApiMessage<()> {
    pub fn text(message: &str) -> Self {
        Self { message: message.to_string(), data: None }
    }
}

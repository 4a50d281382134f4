//! Response bodies for the client endpoints.

use clients_core::Client;
use serde::Serialize;

/// A bare confirmation message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A confirmation message with the affected client.
#[derive(Debug, Clone, Serialize)]
pub struct ClientMessage {
    pub message: String,
    pub client: Client,
}

/// Result of a photo upload.
///
/// Both fields are absent (`{}`) when the uploaded file was empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

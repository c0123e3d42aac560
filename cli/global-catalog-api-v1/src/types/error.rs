use serde::{Deserialize, Serialize};

/// A single entry of the `errors` array of an IBM Cloud error body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ErrorModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Error body returned by the Global Catalog API.
///
/// The catalog is fronted by several services that do not agree on a single
/// error shape, so every known key is accepted and [ErrorResponse::detail]
/// picks the most specific message that is present.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        rename = "errorMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    /// The first non-empty message out of
    /// `errors[0].message`, `error`, `message` and `errorMessage`.
    pub fn detail(&self) -> Option<&str> {
        let first_error = self.errors.first().and_then(|e| e.message.as_deref());
        [
            first_error,
            self.error.as_deref(),
            self.message.as_deref(),
            self.error_message.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|message| !message.is_empty())
    }
}

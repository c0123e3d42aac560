//! Error handling for Global Catalog operations.

use global_catalog_api_v1::types as api_types;
use global_catalog_api_v1::{Error as APIError, ResponseValue};
use reqwest::StatusCode;
use thiserror::Error;

/// Alias to type representing expected errors that are in the API description.
pub type ApiErrorResponse = api_types::ErrorResponse;
pub type ApiErrorResponseValue = ResponseValue<ApiErrorResponse>;

/// Common error type for Global Catalog operations.
///
/// Operation specific errors ([EntryError], [ArtifactError]) wrap this type.
#[derive(Debug, Error)]
pub enum GlobalCatalogError {
    #[error("{}", fmt_api_error(.0))]
    APIError(APIError<ApiErrorResponse>),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("{0}")]
    Other(String),
}

impl GlobalCatalogError {
    /// The HTTP status of the response that caused this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GlobalCatalogError::APIError(APIError::ErrorResponse(response)) => {
                Some(response.status())
            },
            GlobalCatalogError::APIError(APIError::UnexpectedResponse(response)) => {
                Some(response.status())
            },
            _ => None,
        }
    }

    fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Errors of operations on a single catalog entry.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("catalog entry not found")]
    NotFound,
    #[error(transparent)]
    GlobalCatalogError(GlobalCatalogError),
}

impl From<GlobalCatalogError> for EntryError {
    fn from(err: GlobalCatalogError) -> Self {
        if err.is_not_found() {
            EntryError::NotFound
        } else {
            EntryError::GlobalCatalogError(err)
        }
    }
}

/// Errors of operations on the artifacts of a catalog object.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("object or artifact not found")]
    NotFound,
    #[error(transparent)]
    GlobalCatalogError(GlobalCatalogError),
}

impl From<GlobalCatalogError> for ArtifactError {
    fn from(err: GlobalCatalogError) -> Self {
        if err.is_not_found() {
            ArtifactError::NotFound
        } else {
            ArtifactError::GlobalCatalogError(err)
        }
    }
}

/// Extension trait for converting API errors into client errors.
pub trait MapApiErrorExt<T> {
    /// Consumes a `Result<T, APIError<ApiErrorResponse>>`, maps any APIError
    /// into `GlobalCatalogError`, and returns `Ok(T)` or `Err(...)`.
    fn map_api_error(
        self,
    ) -> impl std::future::Future<Output = Result<T, GlobalCatalogError>> + Send;
}

impl<T: Send> MapApiErrorExt<T> for Result<T, APIError<ApiErrorResponse>> {
    async fn map_api_error(self) -> Result<T, GlobalCatalogError> {
        let err = match self {
            Ok(v) => return Ok(v),
            Err(err) => err,
        };

        // Statuses that aren't documented for an operation may still carry
        // an IBM Cloud error body.
        if let APIError::UnexpectedResponse(resp) = err {
            return parse_api_error(resp).await;
        }

        Err(GlobalCatalogError::APIError(err))
    }
}

async fn parse_api_error<T>(resp: reqwest::Response) -> Result<T, GlobalCatalogError> {
    let status = resp.status();
    match ApiErrorResponseValue::from_response::<ApiErrorResponse>(resp).await {
        Ok(resp_parsed) if resp_parsed.detail().is_some() => Err(GlobalCatalogError::APIError(
            APIError::ErrorResponse(resp_parsed),
        )),
        _ => {
            // The body was consumed but is not worth showing (often HTML from
            // a proxy), so recreate a bare response with the right status.
            let resp_bare = http::Response::builder()
                .status(status)
                .body("response body omitted by error parsing")
                .map_err(|e| GlobalCatalogError::Other(e.to_string()))?
                .into();
            Err(GlobalCatalogError::APIError(APIError::UnexpectedResponse(
                resp_bare,
            )))
        },
    }
}

fn fmt_api_error(api_error: &APIError<ApiErrorResponse>) -> String {
    match api_error {
        APIError::ErrorResponse(error_response) => {
            let status = error_response.status();
            let details = error_response.detail().unwrap_or("no details provided");
            format!("{status}: {details}")
        },
        APIError::UnexpectedResponse(resp) => {
            let status = resp.status();
            format!("{status}")
        },
        _ => format!("{api_error}"),
    }
}

use kubeapi_types::ErrorResponse;
use reqwest::Response;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid base URL {0}")]
    InvalidUrl(String),

    #[error("Deployment id {0:?} cannot be used in a request path")]
    InvalidId(String),

    #[error("Failed to deserialize response: {0}")]
    Deserialization(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ClientError {
    /// The structured error returned by the service, if the request got that far.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// True when no response was obtained (connection, DNS, URL or body
    /// encoding failure).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Request(_)
                | ClientError::Encode(_)
                | ClientError::InvalidUrl(_)
                | ClientError::InvalidId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Error payload decoded from a non-success response.
///
/// The variant is chosen by the status code of the response, never by the
/// body. A body that cannot be read or parsed still yields a value of the
/// chosen variant, with the failure text in the message and code `0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Default(DefaultError),
    #[error(transparent)]
    BadRequest(BadRequestError),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Default(err) => err.status,
            ApiError::BadRequest(err) => err.error.status,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ApiError::Default(err) => err.code,
            ApiError::BadRequest(err) => err.error.code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Default(err) => &err.message,
            ApiError::BadRequest(err) => &err.error.message,
        }
    }

    /// Fields rejected by server-side validation. `None` for non-validation errors.
    pub fn failed_fields(&self) -> Option<&[String]> {
        match self {
            ApiError::Default(_) => None,
            ApiError::BadRequest(err) => Some(&err.failed_fields),
        }
    }

    pub(crate) async fn default_from(response: Response) -> Self {
        let (status, body) = read_error_body(response).await;
        ApiError::Default(DefaultError::from_body(status, body))
    }

    pub(crate) async fn bad_request_from(response: Response) -> Self {
        let (status, body) = read_error_body(response).await;
        ApiError::BadRequest(BadRequestError::from_body(status, body))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status}, code {code}: {message}")]
pub struct DefaultError {
    pub status: u16,
    pub code: i64,
    pub message: String,
}

impl DefaultError {
    pub(crate) fn from_body(status: u16, body: std::result::Result<ErrorResponse, String>) -> Self {
        match body {
            Ok(body) => Self {
                status,
                code: body.code,
                message: body.message,
            },
            Err(reason) => Self {
                status,
                code: 0,
                message: reason,
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}, failed fields: {failed_fields:?}")]
pub struct BadRequestError {
    pub error: DefaultError,
    pub failed_fields: Vec<String>,
}

impl BadRequestError {
    pub(crate) fn from_body(status: u16, body: std::result::Result<ErrorResponse, String>) -> Self {
        match body {
            Ok(mut body) => {
                let failed_fields = std::mem::take(&mut body.extras.failed_fields);
                Self {
                    error: DefaultError::from_body(status, Ok(body)),
                    failed_fields,
                }
            }
            Err(reason) => Self {
                error: DefaultError::from_body(status, Err(reason)),
                failed_fields: Vec::new(),
            },
        }
    }
}

async fn read_error_body(response: Response) -> (u16, std::result::Result<ErrorResponse, String>) {
    let status = response.status().as_u16();
    let body = match response.bytes().await {
        Ok(bytes) => parse_error_body(&bytes),
        Err(e) => Err(e.to_string()),
    };
    if let Err(reason) = &body {
        warn!(status, error = %reason, "undecodable error body");
    }
    (status, body)
}

pub(crate) fn parse_error_body(bytes: &[u8]) -> std::result::Result<ErrorResponse, String> {
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}

mod error;
mod transport;

pub use error::{ApiError, BadRequestError, ClientError, DefaultError, Result};
use kubeapi_types::{CreateDeployment, Deployment};
use reqwest::{header::CONTENT_TYPE, Method, Response};
use transport::{Transport, NO_BODY};
use uuid::Uuid;

const DEPLOYMENTS: &str = "deployments";

/// Client for the deployment service. Holds only the base URL and a shared
/// connection pool, so it can be cloned and used from concurrent tasks.
/// Every call makes exactly one request; nothing is retried.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Use a preconfigured reqwest client (timeouts, TLS, proxies).
    pub fn with_http(base_url: impl AsRef<str>, http: reqwest::Client) -> Self {
        Self {
            transport: Transport::new(http, base_url.as_ref()),
        }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Create a deployment. A fresh UUID is assigned when `deployment.id`
    /// is `None`.
    pub async fn create_deployment(&self, mut deployment: CreateDeployment) -> Result<Deployment> {
        let id = deployment
            .id
            .take()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let payload = deployment.into_payload(id);

        let response = self
            .transport
            .send(
                Method::POST,
                &[DEPLOYMENTS],
                &[(CONTENT_TYPE.as_str(), "application/json")],
                Some(&payload),
            )
            .await?;

        match response.status().as_u16() {
            201 => decode_deployment(response).await,
            400 => Err(ApiError::bad_request_from(response).await.into()),
            409 => Err(ApiError::default_from(response).await.into()),
            500..=599 => Err(ApiError::default_from(response).await.into()),
            _ => Err(ApiError::default_from(response).await.into()),
        }
    }

    pub async fn get_deployment(&self, id: &str) -> Result<Deployment> {
        let path = deployment_path(id)?;
        let response = self.transport.send(Method::GET, &path, &[], NO_BODY).await?;

        match response.status().as_u16() {
            200 => decode_deployment(response).await,
            404 => Err(ApiError::default_from(response).await.into()),
            500..=599 => Err(ApiError::default_from(response).await.into()),
            _ => Err(ApiError::default_from(response).await.into()),
        }
    }

    pub async fn delete_deployment(&self, id: &str) -> Result<()> {
        let path = deployment_path(id)?;
        let response = self
            .transport
            .send(Method::DELETE, &path, &[], NO_BODY)
            .await?;

        match response.status().as_u16() {
            204 => Ok(()),
            404 => Err(ApiError::default_from(response).await.into()),
            500..=599 => Err(ApiError::default_from(response).await.into()),
            _ => Err(ApiError::default_from(response).await.into()),
        }
    }
}

/// Path segments for a single deployment. Dot segments would be resolved
/// away by URL normalisation, so they are refused before any request.
fn deployment_path(id: &str) -> Result<[&str; 2]> {
    match id {
        "" | "." | ".." => Err(ClientError::InvalidId(id.to_string())),
        _ => Ok([DEPLOYMENTS, id]),
    }
}

async fn decode_deployment(response: Response) -> Result<Deployment> {
    response
        .json()
        .await
        .map_err(|e| ClientError::Deserialization(e.to_string()))
}

use reqwest::{Method, Response, Url};
use serde::Serialize;
use tracing::debug;

use crate::{ClientError, Result};

/// Placeholder payload for requests that carry no body.
pub(crate) const NO_BODY: Option<&()> = None;

/// Single-attempt HTTP exchange against the service. Status codes are left
/// to the caller.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL with `segments` appended. Each segment is percent-encoded
    /// as a whole, so `/`, `?`, `#` and `%` never change the route.
    pub(crate) fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        headers: &[(&str, &str)],
        payload: Option<&B>,
    ) -> Result<Response> {
        let url = self.url_for(segments)?;
        debug!(%method, %url, "send request");

        let mut request = self.http.request(method, url.clone());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(payload) = payload {
            request = request.body(serde_json::to_vec(payload)?);
        }

        let response = request.send().await?;
        debug!(status = response.status().as_u16(), %url, "received response");
        Ok(response)
    }
}

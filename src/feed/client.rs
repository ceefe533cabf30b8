use std::time::Duration;

use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult, FeedError};

use super::types::{CorrelationMatrix, HistoryResponse, LatestResponse};

/// Client for the monitoring feed API.
pub struct FeedClient {
    http: reqwest::Client,
    base: Url,
}

impl FeedClient {
    /// Builds a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL or an extra header is invalid, or
    /// when the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        headers: &[(String, String)],
    ) -> AppResult<Self> {
        let base = Url::parse(base_url).map_err(|err| {
            AppError::feed(FeedError::InvalidBaseUrl {
                url: base_url.to_owned(),
                source: err,
            })
        })?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_err| {
                AppError::feed(FeedError::InvalidHeaderName { name: name.clone() })
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_err| {
                AppError::feed(FeedError::InvalidHeaderValue { name: name.clone() })
            })?;
            default_headers.insert(header_name, header_value);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("airscope/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers)
            .build()
            .map_err(|err| AppError::feed(FeedError::BuildClient { source: err }))?;

        Ok(Self { http, base })
    }

    /// Fetches the historical series covering the trailing `lookback` window.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable payload. No retry is attempted.
    pub async fn history(&self, lookback: Duration) -> AppResult<HistoryResponse> {
        let endpoint = "history";
        let url = self.endpoint_url(endpoint)?;
        let response = self
            .http
            .get(url)
            .query(&[("sec", lookback.as_secs())])
            .send()
            .await
            .map_err(|err| {
                AppError::feed(FeedError::RequestFailed {
                    endpoint,
                    source: err,
                })
            })?;
        Self::decode(endpoint, response).await
    }

    /// Fetches the most recent reading.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FeedClient::history`].
    pub async fn latest(&self) -> AppResult<LatestResponse> {
        let endpoint = "latest";
        let url = self.endpoint_url(endpoint)?;
        let response = self.http.get(url).send().await.map_err(|err| {
            AppError::feed(FeedError::RequestFailed {
                endpoint,
                source: err,
            })
        })?;
        Self::decode(endpoint, response).await
    }

    /// Fetches the measure correlation matrix.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FeedClient::history`].
    pub async fn correlation(&self) -> AppResult<CorrelationMatrix> {
        let endpoint = "correlation";
        let url = self.endpoint_url(endpoint)?;
        let response = self.http.get(url).send().await.map_err(|err| {
            AppError::feed(FeedError::RequestFailed {
                endpoint,
                source: err,
            })
        })?;
        Self::decode(endpoint, response).await
    }

    fn endpoint_url(&self, path: &'static str) -> AppResult<Url> {
        self.base.join(path).map_err(|err| {
            AppError::feed(FeedError::InvalidEndpoint {
                path: path.to_owned(),
                source: err,
            })
        })
    }

    async fn decode<T>(endpoint: &'static str, response: reqwest::Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::feed(FeedError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            }));
        }
        response.json::<T>().await.map_err(|err| {
            AppError::feed(FeedError::DecodePayload {
                endpoint,
                source: err,
            })
        })
    }
}

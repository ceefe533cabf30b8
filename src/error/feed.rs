use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid endpoint path '{path}': {source}")]
    InvalidEndpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName { name: String },
    #[error("Invalid header value for '{name}'.")]
    InvalidHeaderValue { name: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{endpoint}' failed: {source}")]
    RequestFailed {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Endpoint '{endpoint}' returned status {status}.")]
    UnexpectedStatus { endpoint: &'static str, status: u16 },
    #[error("Failed to decode '{endpoint}' payload: {source}")]
    DecodePayload {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

use gloo_net::http::{RequestBuilder, Response};

use crate::data::ErrorResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

impl ApiError {
    /// Map a non-2xx status to an error, preferring the server's `detail` text.
    pub fn from_status(status: u16, detail: Option<String>, endpoint: &str) -> Self {
        match status {
            400 => Self::BadRequest(detail.unwrap_or_else(|| format!("Bad request to {endpoint}"))),
            404 => Self::NotFound(detail.unwrap_or_else(|| format!("{endpoint} not found"))),
            409 => Self::Conflict(detail.unwrap_or_else(|| format!("Conflict at {endpoint}"))),
            500..=599 => Self::InternalServerError,
            status => Self::UnexpectedStatusCode(status),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Query string parameters, in order.
pub type QueryParams<'a> = &'a [(&'a str, &'a str)];

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    let status = response.status();
    if (200..=299).contains(&status) {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.detail);
    Err(ApiError::from_status(status, detail, endpoint))
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, endpoint).await?;
    validated_response
        .json::<T>()
        .await
        .map_err(ApiError::ParseError)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn make_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: QueryParams<'_>,
    ) -> ApiResult<Response>;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T>(&self, endpoint: &str, query: QueryParams<'_>) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn delete<T>(&self, endpoint: &str, query: QueryParams<'_>) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

pub struct HttpApiClient {
    root_url: String,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: QueryParams<'_>,
    ) -> ApiResult<Response> {
        let url = self.url(endpoint);

        let request: RequestBuilder = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
        };

        request
            .query(query.iter().copied())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint, &[]).await?;
        handle_json_response(response, endpoint).await
    }

    async fn post<T>(&self, endpoint: &str, query: QueryParams<'_>) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Post, endpoint, query).await?;
        handle_json_response(response, endpoint).await
    }

    async fn delete<T>(&self, endpoint: &str, query: QueryParams<'_>) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .make_request(HttpMethod::Delete, endpoint, query)
            .await?;
        handle_json_response(response, endpoint).await
    }
}

// Pet API HTTP client.
// Handles base URL resolution and request/response processing.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{PetshelfError, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const BASE_URL_ENV: &str = "PETSHELF_API_URL";

/// HTTP client for the pet record service.
pub struct PetApiClient {
    client: Client,
    base_url: String,
}

impl PetApiClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("petshelf-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PetshelfError::Api)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Create a client from the PETSHELF_API_URL environment variable,
    /// falling back to the local development default.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to the pet service.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await.map_err(PetshelfError::Api)?;
        Self::check_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<B: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(PetshelfError::Api)?;
        Self::check_response(response).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "DELETE");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(PetshelfError::Api)?;
        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK
            | StatusCode::CREATED
            | StatusCode::ACCEPTED
            | StatusCode::NO_CONTENT => Ok(response),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(PetshelfError::NotFound(url))
            }
            status => Err(PetshelfError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}

//! JSON fetch client.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shop_core::ApiConfig;

use crate::error::FetchError;
use crate::transport::{HttpRequest, Method, Transport};

/// JSON client bound to one API base URL.
///
/// No retries and no timeouts: every call issues exactly one request and
/// waits for it to settle.
pub struct FetchClient<T> {
    transport: T,
    api: ApiConfig,
}

impl<T: Transport> FetchClient<T> {
    /// Create a new fetch client.
    pub fn new(transport: T, api: ApiConfig) -> Self {
        Self { transport, api }
    }

    /// `GET <base><path>` and decode the JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, FetchError> {
        let request = HttpRequest::new(Method::Get, self.api.endpoint(path))
            .header("Accept", "application/json");
        self.execute(request).await
    }

    /// `POST <base><path>` with a JSON body and decode the JSON response.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, FetchError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body =
            serde_json::to_vec(body).map_err(|e| FetchError::Serialization(e.to_string()))?;
        let request = HttpRequest::new(Method::Post, self.api.endpoint(path))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body);
        self.execute(request).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, FetchError> {
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                url,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// The API configuration in use.
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

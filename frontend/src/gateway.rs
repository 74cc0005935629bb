use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use shared::constants::{PRIZES_ENDPOINT, SPIN_ENDPOINT, STATUS_ENDPOINT};
use shared::{
    BackendGateway, GatewayError, Identity, PrizeListResponse, SpinResponse, SpinTimer, StatusResponse,
};

/// Talks to the wheel backend over fetch.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        if !response.ok() {
            let code = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { code, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn post_identity<T: DeserializeOwned>(&self, path: &str, identity: &Identity) -> Result<T, GatewayError> {
        let response = Request::post(&self.url(path))
            .json(&identity.to_payload())
            .map_err(|e| GatewayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Self::decode(response).await
    }
}

#[async_trait(?Send)]
impl BackendGateway for HttpGateway {
    async fn fetch_prizes(&self) -> Result<PrizeListResponse, GatewayError> {
        let response = Request::get(&self.url(PRIZES_ENDPOINT))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn fetch_status(&self, identity: &Identity) -> Result<StatusResponse, GatewayError> {
        self.post_identity(STATUS_ENDPOINT, identity).await
    }

    async fn request_spin(&self, identity: &Identity) -> Result<SpinResponse, GatewayError> {
        self.post_identity(SPIN_ENDPOINT, identity).await
    }
}

/// Browser `setTimeout` wrapped as a future.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl SpinTimer for BrowserTimer {
    async fn sleep(&self, duration_ms: u32) {
        TimeoutFuture::new(duration_ms).await;
    }
}

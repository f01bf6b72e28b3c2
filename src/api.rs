use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::types::{Draft, Participant};

// API URL - change this to your backend URL
pub const API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// The backend contract the view consumes. Injectable so the operations in
/// [`crate::ops`] can be exercised without a browser runtime.
#[allow(async_fn_in_trait)]
pub trait ParticipantsApi {
    async fn list(&self) -> Result<Vec<Participant>, ApiError>;
    async fn create(&self, draft: &Draft) -> Result<(), ApiError>;
    async fn delete(&self, id: u32) -> Result<(), ApiError>;
}

/// `fetch`-backed implementation against the competition backend.
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(API_URL)
    }
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn send(&self, method: &str, path: &str, body: Option<&str>) -> Result<Response, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

        let headers = Headers::new().map_err(js_err)?;
        headers.set("Content-Type", "application/json").map_err(js_err)?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&JsValue::from(&headers));
        if let Some(b) = body {
            opts.set_body(&JsValue::from_str(b));
        }

        let url = format!("{}{}", self.base_url, path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Network("invalid response object".into()))?;

        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp)
    }
}

impl ParticipantsApi for HttpApi {
    async fn list(&self) -> Result<Vec<Participant>, ApiError> {
        let resp = self.send("GET", "/participants/", None).await?;
        let json = JsFuture::from(resp.json().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &Draft) -> Result<(), ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        // Response body (the created record) is ignored; the caller reloads.
        self.send("POST", "/participants/", Some(&body)).await?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        self.send("DELETE", &format!("/participants/{id}"), None).await?;
        Ok(())
    }
}

fn js_err(value: JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}

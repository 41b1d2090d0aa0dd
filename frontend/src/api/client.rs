use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::{ApiError, BackendErrorBody},
    config,
    utils::storage::{default_token_store, TokenStore},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStore>,
    unauthorized_handler: Option<Rc<dyn Fn()>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: default_token_store(),
            unauthorized_handler: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(config::normalize_base_url(&base_url.into())),
            ..Self::new()
        }
    }

    pub fn with_token_store(mut self, tokens: Rc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Invoked after any authenticated call answers 401 and the token has been dropped.
    pub fn on_unauthorized(mut self, handler: impl Fn() + 'static) -> Self {
        self.unauthorized_handler = Some(Rc::new(handler));
        self
    }

    pub(crate) fn token_store(&self) -> &Rc<dyn TokenStore> {
        &self.tokens
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let token = self
            .tokens
            .get()
            .ok_or_else(|| ApiError::unauthorized("No token"))?;
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by backend, clearing stored token");
            self.tokens.clear();
            if let Some(handler) = &self.unauthorized_handler {
                handler();
            }
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, ApiError> {
        self.execute(Method::GET, path, query, None, true, fallback)
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.execute(Method::POST, path, &[], Some(body), true, fallback)
            .await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.execute(Method::PUT, path, &[], Some(body), true, fallback)
            .await
    }

    /// POST without a bearer token (login, register, password reset).
    pub(crate) async fn post_public<B, T>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.execute(Method::POST, path, &[], Some(body), false, fallback)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        authenticated: bool,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if authenticated {
            request = request.headers(self.get_auth_headers()?);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        log::debug!("{} {}", method, path);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if authenticated {
            self.handle_unauthorized_status(status);
        }
        if status.is_success() {
            decode_success(response).await
        } else {
            let body = response.json::<BackendErrorBody>().await.ok();
            let error = ApiError::from_status(status.as_u16(), body, fallback);
            log::debug!("{} {} failed with {}: {}", method, path, status, error);
            Err(error)
        }
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))
}

async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
    // 204 and empty bodies decode as JSON null so `()` targets succeed.
    let raw = if text.trim().is_empty() { "null" } else { &text };
    serde_json::from_str(raw).map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
}

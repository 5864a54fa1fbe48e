use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{TaskboardError, TaskboardResult};
use crate::logging::{log_debug, log_error};
use crate::models::{ErrorBody, Payload};

/// Thin JSON-over-HTTP client: bearer auth, base URL joining and error
/// normalisation. Resource-level calls live in `TaskboardClient`.
pub struct RestClient {
    client: Client,
    base_url: String,
    authenticated: bool,
}

impl RestClient {
    pub fn new(base_url: &str, token: Option<&str>) -> TaskboardResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| TaskboardError::InvalidInput("Token contains invalid characters".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            authenticated: token.is_some(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> TaskboardResult<T> {
        let request = self.client.get(self.url(path));
        self.send_json(request, Method::GET, path).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> TaskboardResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)).query(query);
        self.send_json(request, Method::GET, path).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> TaskboardResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.send_json(request, Method::POST, path).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> TaskboardResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.put(self.url(path)).json(body);
        self.send_json(request, Method::PUT, path).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> TaskboardResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.patch(self.url(path)).json(body);
        self.send_json(request, Method::PATCH, path).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> TaskboardResult<T> {
        let request = self.client.post(self.url(path)).multipart(form);
        self.send_json(request, Method::POST, path).await
    }

    /// Sends a request whose response body is irrelevant.
    pub async fn send_unit(&self, method: Method, path: &str) -> TaskboardResult<()> {
        let request = self.client.request(method.clone(), self.url(path));
        self.execute(request, &method, path).await?;
        Ok(())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
    ) -> TaskboardResult<T> {
        let response = self.execute(request, &method, path).await?;
        let text = response.text().await?;
        decode_body(&text).map_err(|e| {
            log_error(&format!("{} {} returned an unexpected body: {}", method, path, e));
            e
        })
    }

    async fn execute(&self, request: RequestBuilder, method: &Method, path: &str) -> TaskboardResult<Response> {
        log_debug(&format!("{} {}", method, path));

        let response = request.send().await.map_err(|e| {
            log_error(&format!("{} {} failed: {}", method, path, e));
            TaskboardError::RequestError(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = normalize_error(status.as_u16(), &body, status.canonical_reason());
            log_error(&format!("{} {} -> {}: {}", method, path, status, error));
            return Err(error);
        }

        Ok(response)
    }
}

/// Decodes a success body, unwrapping a `{ "data": ... }` envelope if present.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> TaskboardResult<T> {
    let payload: Payload<T> = serde_json::from_str(text)?;
    Ok(payload.into_inner())
}

/// Maps a failed response to an error carrying the backend's message.
pub fn normalize_error(status: u16, body: &str, reason: Option<&str>) -> TaskboardError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .or_else(|| {
            let trimmed = body.trim();
            // HTML error pages from proxies are noise
            if trimmed.is_empty() || trimmed.starts_with('<') {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .unwrap_or_else(|| reason.unwrap_or("Request failed").to_string());

    match status {
        401 => TaskboardError::Unauthorized,
        404 => TaskboardError::NotFound(message),
        _ => TaskboardError::Api { status, message },
    }
}

//! Native transport over `reqwest`, used by the command-line client.
//!
//! The server keys carts by session, so an optional session cookie is sent
//! as a default `Cookie` header on every request. Form posts use
//! `application/x-www-form-urlencoded`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

use super::transport::CartTransport;
use crate::error::CartError;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Config`] if the cookie is not a valid header
    /// value or the HTTP client cannot be constructed.
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self, CartError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie {
            let value = HeaderValue::from_str(cookie).map_err(|e| CartError::Config(format!("session cookie: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CartError::Config(format!("http client: {e}")))?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl CartTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String, CartError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| CartError::transport(path, e))?;
        log::debug!("GET {path} -> {}", resp.status());
        resp.text().await.map_err(|e| CartError::transport(path, e))
    }

    async fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> Result<String, CartError> {
        let resp = self
            .client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .map_err(|e| CartError::transport(path, e))?;
        log::debug!("POST {path} -> {}", resp.status());
        resp.text().await.map_err(|e| CartError::transport(path, e))
    }
}

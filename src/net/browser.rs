//! Browser transport over `gloo-net`.
//!
//! Form posts are sent as a `FormData` body, the same multipart encoding a
//! native `<form>` submission would use. Paths are resolved against the page
//! origin by the browser.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::transport::CartTransport;
use crate::error::CartError;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl CartTransport for BrowserTransport {
    async fn get(&self, path: &str) -> Result<String, CartError> {
        let resp = Request::get(path)
            .send()
            .await
            .map_err(|e| CartError::transport(path, e))?;
        log::debug!("GET {path} -> {}", resp.status());
        resp.text().await.map_err(|e| CartError::transport(path, e))
    }

    async fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> Result<String, CartError> {
        let form = FormData::new().map_err(|e| CartError::transport(path, js_error(&e)))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|e| CartError::transport(path, js_error(&e)))?;
        }

        let resp = Request::post(path)
            .body(form)
            .map_err(|e| CartError::transport(path, e))?
            .send()
            .await
            .map_err(|e| CartError::transport(path, e))?;
        log::debug!("POST {path} -> {}", resp.status());
        resp.text().await.map_err(|e| CartError::transport(path, e))
    }
}

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestInit, Response};

use crate::client::ToggleTransport;
use crate::error::{Result, UiError};

/// `window.fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl ToggleTransport for FetchTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<Value> {
        let win = window().ok_or_else(|| UiError::Dom("No window".into()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(path, &opts).map_err(UiError::network)?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(UiError::network)?;

        let resp_val = JsFuture::from(win.fetch_with_request(&req))
            .await
            .map_err(UiError::network)?;
        let resp: Response = resp_val.dyn_into().map_err(UiError::network)?;

        if !resp.ok() {
            // Error replies still carry JSON worth handing back
            tracing::debug!(path, status = resp.status(), "toggle endpoint answered non-2xx");
        }

        let text_val = JsFuture::from(resp.text().map_err(UiError::decode)?)
            .await
            .map_err(UiError::decode)?;
        let text = text_val
            .as_string()
            .ok_or_else(|| UiError::Decode("response body is not text".into()))?;

        serde_json::from_str(&text).map_err(|e| UiError::Decode(e.to_string()))
    }
}

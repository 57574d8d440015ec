//! Startup CSV download over the browser fetch API.

use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch the emissions CSV from `url` and return its body as text.
///
/// There is no retry, timeout, or cancellation: the dataset is fetched once
/// at startup and a failure here is terminal for the session. The caller
/// logs the error and surfaces it as the app's error state.
pub async fn fetch_csv(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow!("invalid request for {}: {:?}", url, e))?;

    let fetched = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("fetch failed for {}: {:?}", url, e))?;
    let response: Response = fetched
        .dyn_into()
        .map_err(|_| anyhow!("fetch returned a non-Response value"))?;
    if !response.ok() {
        return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
    }

    let body = response
        .text()
        .map_err(|e| anyhow!("response body unavailable: {:?}", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("reading response body failed: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow!("response body was not text"))
}

//! HTTP client for the food catalog backend.
//!
//! Older backend deployments return payloads bare; newer ones wrap them in
//! a `{success, data}` envelope. Both shapes are normalized here so no
//! other component ever sees the difference.

use std::fmt;

use serde::Deserialize;

use foodnest_common::food::FoodItem;
use foodnest_common::form::NewFood;

/// Backend base URL, overridable at compile time.
fn api_base_url() -> &'static str {
    option_env!("FOODNEST_API_URL").unwrap_or("https://foodnest-backend.vercel.app")
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Non-2xx status from the backend.
    Http { status: u16, body: String },
    /// Response body did not match the expected shape.
    Parse(String),
    /// The request never completed (offline, CORS, ...).
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, .. } => write!(f, "Server returned HTTP {status}"),
            ApiError::Parse(err) => write!(f, "Unexpected response from server: {err}"),
            ApiError::Network(err) => write!(f, "Network error: {err}"),
        }
    }
}

/// Either a bare payload or the `{success, data}` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped {
        #[allow(dead_code)]
        success: bool,
        data: T,
    },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data, .. } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Backend acknowledgement for a create request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Fetch the full food list.
pub async fn fetch_foods() -> Result<Vec<FoodItem>, ApiError> {
    let body = get_json(api_base_url(), "/foods").await?;
    let envelope: Envelope<Vec<FoodItem>> =
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.into_inner())
}

/// Fetch a single food by id.
pub async fn fetch_food(id: &str) -> Result<FoodItem, ApiError> {
    let body = get_json(api_base_url(), &format!("/foods/{id}")).await?;
    let envelope: Envelope<FoodItem> =
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.into_inner())
}

/// Submit a new food record.
pub async fn create_food(food: &NewFood) -> Result<CreateResponse, ApiError> {
    let body = serde_json::to_string(food).map_err(|e| ApiError::Parse(e.to_string()))?;
    let response = post_json(api_base_url(), "/add_foods", &body).await?;
    serde_json::from_str(&response).map_err(|e| ApiError::Parse(e.to_string()))
}

async fn get_json(base_url: &str, path: &str) -> Result<String, ApiError> {
    fetch_json(&format!("{base_url}{path}"), "GET", None).await
}

async fn post_json(base_url: &str, path: &str, body: &str) -> Result<String, ApiError> {
    fetch_json(&format!("{base_url}{path}"), "POST", Some(body.to_string())).await
}

// ─── HTTP transport (WASM) ───────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn fetch_json(url: &str, method: &str, body: Option<String>) -> Result<String, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);

    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(format!("Failed to create request: {e:?}")))?;

    if method == "POST" {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(format!("Failed to set header: {e:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("Fetch failed: {e:?}")))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("Response is not a Response object".into()))?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Network(format!("Failed to get text: {e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Network(format!("Failed to read body: {e:?}")))?;

    let text = text
        .as_string()
        .ok_or_else(|| ApiError::Network("Response body is not a string".into()))?;

    let status = resp.status();
    if status >= 400 {
        return Err(ApiError::Http { status, body: text });
    }

    Ok(text)
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn fetch_json(_url: &str, _method: &str, _body: Option<String>) -> Result<String, ApiError> {
    Err(ApiError::Network(
        "HTTP client only available in WASM".to_string(),
    ))
}

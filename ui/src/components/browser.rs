//! Thin wrappers over browser storage, cookies, timers, and navigation.
//!
//! Everything degrades to a no-op (or `None`) outside WASM so the crate
//! stays type-checkable natively.

#[cfg(target_family = "wasm")]
use wasm_bindgen::JsCast;

// ─── Local storage ───────────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
pub fn local_storage_get(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(target_family = "wasm")]
pub fn local_storage_set(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(target_family = "wasm"))]
pub fn local_storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_family = "wasm"))]
pub fn local_storage_set(_key: &str, _value: &str) {}

// ─── Cookies ─────────────────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(target_family = "wasm")]
pub fn cookie(name: &str) -> Option<String> {
    let all = html_document()?.cookie().ok()?;
    for pair in all.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                let decoded = js_sys::decode_uri_component(value).ok()?;
                return Some(String::from(decoded));
            }
        }
    }
    None
}

/// Write a cookie with the given lifetime. `SameSite=Strict` always;
/// `Secure` only in release builds, where the site is served over HTTPS.
#[cfg(target_family = "wasm")]
pub fn set_cookie(name: &str, value: &str, max_age_days: i64) {
    if let Some(doc) = html_document() {
        let encoded = String::from(js_sys::encode_uri_component(value));
        let max_age = max_age_days * 24 * 60 * 60;
        let secure = if cfg!(debug_assertions) { "" } else { "; Secure" };
        let cookie = format!("{name}={encoded}; Max-Age={max_age}; Path=/; SameSite=Strict{secure}");
        let _ = doc.set_cookie(&cookie);
    }
}

#[cfg(target_family = "wasm")]
pub fn delete_cookie(name: &str) {
    if let Some(doc) = html_document() {
        let cookie = format!("{name}=; Max-Age=0; Path=/; SameSite=Strict");
        let _ = doc.set_cookie(&cookie);
    }
}

#[cfg(not(target_family = "wasm"))]
pub fn cookie(_name: &str) -> Option<String> {
    None
}

#[cfg(not(target_family = "wasm"))]
pub fn set_cookie(_name: &str, _value: &str, _max_age_days: i64) {}

#[cfg(not(target_family = "wasm"))]
pub fn delete_cookie(_name: &str) {}

// ─── Navigation & time ───────────────────────────────────────────────────────

/// Full page navigation, bypassing the router.
#[cfg(target_family = "wasm")]
pub fn hard_redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(target_family = "wasm"))]
pub fn hard_redirect(_path: &str) {}

#[cfg(target_family = "wasm")]
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_family = "wasm"))]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Cooperative sleep, used for toast expiry and the mock auth latency.
#[cfg(target_family = "wasm")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_family = "wasm"))]
pub async fn sleep_ms(_ms: u32) {}

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ============================================================================
// Hosted Auth Client
// ============================================================================

// The auth client is created by index.html from the provider's browser SDK
// and exposed as `window.authClient`. Every call resolves to a
// `{ data, error }` envelope; genuine exceptions (network loss, missing
// client) reject the promise and land in the `catch` path.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = "signInWithPassword", catch)]
    pub(crate) async fn sign_in_with_password_raw(credentials: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = "signInWithOAuth", catch)]
    pub(crate) async fn sign_in_with_oauth_raw(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = "signUp", catch)]
    pub(crate) async fn sign_up_raw(credentials: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = "signOut", catch)]
    pub(crate) async fn sign_out_raw() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "authClient"], js_name = "getSession", catch)]
    pub(crate) async fn get_session_raw() -> Result<JsValue, JsValue>;
}

// ============================================================================
// Envelope Handling
// ============================================================================

/// Extract a human-readable message from a thrown JS value.
///
/// Provider error objects keep `message` as a non-enumerable own property,
/// so this goes through `Reflect` instead of deserializing the whole value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Ok(message) = js_sys::Reflect::get(err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    err.as_string()
        .unwrap_or_else(|| "Unknown auth client error".to_string())
}

/// Split a `{ data, error }` response envelope into its data half.
///
/// The client resolves failed operations with a populated `error` member
/// rather than rejecting, so rejected promises and error envelopes both
/// funnel into the same `Err(String)` shape.
pub fn unwrap_envelope(value: JsValue) -> Result<JsValue, String> {
    let error =
        js_sys::Reflect::get(&value, &JsValue::from_str("error")).unwrap_or(JsValue::UNDEFINED);
    if !error.is_null() && !error.is_undefined() {
        return Err(js_error_message(&error));
    }
    js_sys::Reflect::get(&value, &JsValue::from_str("data")).map_err(|e| js_error_message(&e))
}

/// Check a `{ error }` envelope from an operation with no data payload
pub fn ensure_envelope_ok(value: JsValue) -> Result<(), String> {
    unwrap_envelope(value).map(|_| ())
}

/// Serialize a request payload for the auth client
pub fn to_client_args<A: Serialize>(args: &A) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| format!("Failed to serialize args: {}", e))
}

/// Deserialize the data half of an envelope into a typed response
pub fn from_client_value<R: for<'de> Deserialize<'de>>(value: JsValue) -> Result<R, String> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| format!("Failed to deserialize response: {}", e))
}

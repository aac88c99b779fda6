//! API utilities for frontend-backend communication
//!
//! Thin helpers over the browser fetch API. Every endpoint either returns
//! the expected JSON record or the `{error}` envelope; the helpers decode
//! the envelope into `Err(message)` so callers see one failure channel.

use contracts::ErrorResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8080 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn response_text(resp: &Response) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

/// Decode a payload that is either `T` or the `{error}` envelope.
fn decode_payload<T: DeserializeOwned>(text: &str, status: u16, ok: bool) -> Result<T, String> {
    if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(text) {
        return Err(envelope.error);
    }
    if !ok {
        return Err(format!("HTTP {}", status));
    }
    serde_json::from_str(text).map_err(|e| format!("{e}"))
}

async fn run_request<T: DeserializeOwned>(request: Request) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    let text = response_text(&resp).await?;
    decode_payload(&text, resp.status(), resp.ok())
}

/// GET `path` and decode the JSON response.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    run_request(request).await
}

/// PUT a JSON `body` to `path` and decode the JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let payload = serde_json::to_string(body).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    run_request(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_wins_over_status() {
        let result: Result<contracts::Sale, String> =
            decode_payload(r#"{"error": "sale not found"}"#, 200, true);
        assert_eq!(result.unwrap_err(), "sale not found");
    }

    #[test]
    fn non_ok_status_without_envelope() {
        let result: Result<Vec<contracts::Sale>, String> = decode_payload("oops", 500, false);
        assert_eq!(result.unwrap_err(), "HTTP 500");
    }

    #[test]
    fn decodes_expected_record() {
        let result: Result<contracts::PortfolioItem, String> = decode_payload(
            r#"{"symbol":"AAPL","shares":10.0,"purchase_price":150.0,
                "capital_invested":1500.0,"current_price":175.0,
                "current_value":1750.0,"profit_loss":250.0}"#,
            200,
            true,
        );
        assert_eq!(result.unwrap().symbol, "AAPL");
    }
}

//! WASM HTTP client for the dashboard backend.
//!
//! Calls `GET /wallet`, `GET /transactions` and `GET /user`. The backend URL is
//! taken from `REVDASH_API_URL` at build time, falling back to a local server.

use serde::de::DeserializeOwned;

use revdash_common::api::{
    decode, endpoint_url, ApiError, DEFAULT_API_URL, TRANSACTIONS_PATH, USER_PATH, WALLET_PATH,
};
use revdash_common::transaction::Transaction;
use revdash_common::user::User;
use revdash_common::wallet::Wallet;

/// Backend base URL from compile-time env vars.
fn api_url() -> String {
    option_env!("REVDASH_API_URL")
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn from_env() -> Self {
        Self { base_url: api_url() }
    }

    pub async fn wallet(&self) -> Result<Wallet, ApiError> {
        self.get("wallet", WALLET_PATH).await
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get("transactions", TRANSACTIONS_PATH).await
    }

    pub async fn user(&self) -> Result<User, ApiError> {
        self.get("user", USER_PATH).await
    }

    async fn get<T: DeserializeOwned>(&self, what: &'static str, path: &str) -> Result<T, ApiError> {
        let url = endpoint_url(&self.base_url, path);
        tracing::debug!("GET {url}");
        let body = get_text(&url).await?;
        decode(what, &body)
    }
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn get_text(url: &str) -> Result<String, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(format!("Failed to create request: {:?}", e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Network(format!("Failed to set header: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("Fetch failed: {:?}", e)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("Response is not a Response object".into()))?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Network(format!("Failed to get text: {:?}", e)))?,
    )
    .await
    .map_err(|e| ApiError::Network(format!("Failed to read body: {:?}", e)))?;

    let body = text
        .as_string()
        .ok_or_else(|| ApiError::Network("Response body is not a string".into()))?;

    let status = resp.status();
    if status >= 400 {
        return Err(ApiError::Status {
            status,
            url: url.to_string(),
            body,
        });
    }

    Ok(body)
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn get_text(_url: &str) -> Result<String, ApiError> {
    Err(ApiError::Network("API client only available in WASM".into()))
}

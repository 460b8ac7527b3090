//! Endpoint paths, response decoding and the per-request state the views consume.

use serde::de::DeserializeOwned;
use thiserror::Error;

pub const WALLET_PATH: &str = "/wallet";
pub const TRANSACTIONS_PATH: &str = "/transactions";
pub const USER_PATH: &str = "/user";

/// Backend used when no base URL is configured at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}: {body}")]
    Status { status: u16, url: String, body: String },
    #[error("could not decode {what}: {message}")]
    Decode { what: &'static str, message: String },
}

/// Join a base URL and an endpoint path without doubling the slash.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Decode a JSON response body.
pub fn decode<T: DeserializeOwned>(what: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        what,
        message: e.to_string(),
    })
}

/// Outcome of one fetch as seen by the view layer.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> FetchState<T> {
    /// Map a pending or finished request result.
    pub fn from_result(result: Option<Result<T, ApiError>>) -> Self {
        match result {
            None => FetchState::Loading,
            Some(Ok(value)) => FetchState::Ready(value),
            Some(Err(err)) => FetchState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(value) => FetchState::Ready(f(value)),
            FetchState::Failed(err) => FetchState::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Transaction;
    use crate::wallet::Wallet;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://localhost:4000", WALLET_PATH), "http://localhost:4000/wallet");
        assert_eq!(endpoint_url("http://api.test/", USER_PATH), "http://api.test/user");
    }

    #[test]
    fn test_decode_error_names_payload() {
        let err = decode::<Wallet>("wallet", "{\"balance\": \"lots\"}").unwrap_err();
        match &err {
            ApiError::Decode { what, .. } => assert_eq!(*what, "wallet"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().starts_with("could not decode wallet"));
    }

    #[test]
    fn test_decode_transaction_list() {
        let txs: Vec<Transaction> = decode("transactions", "[]").unwrap();
        assert!(txs.is_empty());
    }

    #[test]
    fn test_fetch_state_from_result() {
        let loading: FetchState<u32> = FetchState::from_result(None);
        assert!(loading.is_loading());

        let ready = FetchState::from_result(Some(Ok(7)));
        assert_eq!(ready.ready(), Some(&7));
        assert_eq!(ready.map(|n| n * 2), FetchState::Ready(14));

        let failed: FetchState<u32> =
            FetchState::from_result(Some(Err(ApiError::Network("offline".into()))));
        assert_eq!(failed.ready(), None);
        assert_eq!(failed.error(), Some(&ApiError::Network("offline".into())));
    }
}

//! Development backend for the dashboard.
//!
//! Serves wallet, transaction and user fixtures over HTTP so the UI can be
//! run without the real API. Latency, an empty transaction list and per-endpoint
//! failures can be switched on to exercise the UI's loading, empty and error
//! states.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower_http::cors::{Any, CorsLayer};

use revdash_common::api::{TRANSACTIONS_PATH, USER_PATH, WALLET_PATH};
use revdash_common::transaction::Transaction;
use revdash_common::user::User;
use revdash_common::wallet::Wallet;

const BUILTIN_WALLET: &str = include_str!("../fixtures/wallet.json");
const BUILTIN_TRANSACTIONS: &str = include_str!("../fixtures/transactions.json");
const BUILTIN_USER: &str = include_str!("../fixtures/user.json");

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid fixture {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid built-in {name} fixture: {source}")]
    Builtin {
        name: &'static str,
        source: serde_json::Error,
    },
}

/// Data served by the three endpoints.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub wallet: Wallet,
    pub transactions: Vec<Transaction>,
    pub user: User,
}

impl Fixtures {
    /// Sample data compiled into the binary.
    pub fn builtin() -> Result<Self, FixtureError> {
        Ok(Self {
            wallet: parse_builtin("wallet", BUILTIN_WALLET)?,
            transactions: parse_builtin("transactions", BUILTIN_TRANSACTIONS)?,
            user: parse_builtin("user", BUILTIN_USER)?,
        })
    }

    /// Reads `wallet.json`, `transactions.json` and `user.json` from `dir`.
    /// A missing file falls back to the built-in fixture for that endpoint.
    pub fn load(dir: &Path) -> Result<Self, FixtureError> {
        Ok(Self {
            wallet: load_or_builtin(dir, "wallet", BUILTIN_WALLET)?,
            transactions: load_or_builtin(dir, "transactions", BUILTIN_TRANSACTIONS)?,
            user: load_or_builtin(dir, "user", BUILTIN_USER)?,
        })
    }
}

fn parse_builtin<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Builtin { name, source })
}

fn load_or_builtin<T: DeserializeOwned>(
    dir: &Path,
    name: &'static str,
    builtin: &str,
) -> Result<T, FixtureError> {
    let path = dir.join(format!("{name}.json"));
    if !path.exists() {
        tracing::info!("No {} in {}, using built-in fixture", name, dir.display());
        return parse_builtin(name, builtin);
    }
    let raw = std::fs::read_to_string(&path).map_err(|source| FixtureError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse { path, source })
}

/// Endpoints that can be told to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Endpoint {
    Wallet,
    Transactions,
    User,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Wallet => WALLET_PATH,
            Endpoint::Transactions => TRANSACTIONS_PATH,
            Endpoint::User => USER_PATH,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Behaviour switches for exercising the UI's edge states.
#[derive(Clone, Debug, Default)]
pub struct ServeOptions {
    pub latency: Duration,
    pub empty: bool,
    pub failing: HashSet<Endpoint>,
}

pub struct AppState {
    fixtures: Fixtures,
    options: ServeOptions,
}

impl AppState {
    pub fn new(fixtures: Fixtures, options: ServeOptions) -> Arc<Self> {
        Arc::new(Self { fixtures, options })
    }

    /// Applies the configured delay, then refuses the request if the endpoint
    /// is marked as failing.
    async fn gate(&self, endpoint: Endpoint) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
        tracing::debug!("GET {endpoint}");
        if !self.options.latency.is_zero() {
            tokio::time::sleep(self.options.latency).await;
        }
        if self.options.failing.contains(&endpoint) {
            tracing::info!("Failing {endpoint} on request");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("{endpoint} is configured to fail"),
                }),
            ));
        }
        Ok(())
    }

    fn transactions(&self) -> &[Transaction] {
        if self.options.empty {
            &[]
        } else {
            &self.fixtures.transactions
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    transactions: usize,
    failing: Vec<String>,
}

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

async fn wallet_handler(State(state): State<Arc<AppState>>) -> HandlerResult<Wallet> {
    state.gate(Endpoint::Wallet).await?;
    Ok(Json(state.fixtures.wallet.clone()))
}

async fn transactions_handler(State(state): State<Arc<AppState>>) -> HandlerResult<Vec<Transaction>> {
    state.gate(Endpoint::Transactions).await?;
    Ok(Json(state.transactions().to_vec()))
}

async fn user_handler(State(state): State<Arc<AppState>>) -> HandlerResult<User> {
    state.gate(Endpoint::User).await?;
    Ok(Json(state.fixtures.user.clone()))
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut failing: Vec<String> = state
        .options
        .failing
        .iter()
        .map(ToString::to_string)
        .collect();
    failing.sort();
    Json(HealthResponse {
        status: "ok".to_string(),
        transactions: state.transactions().len(),
        failing,
    })
}

/// All routes, with CORS open to any origin so the wasm dev server can call in.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route(WALLET_PATH, get(wallet_handler))
        .route(TRANSACTIONS_PATH, get(transactions_handler))
        .route(USER_PATH, get(user_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_fixtures_parse() {
        let fixtures = Fixtures::builtin().unwrap();
        assert_eq!(fixtures.wallet.balance, Some(750.56));
        assert_eq!(fixtures.user.initials(), "OJ");
        assert!(!fixtures.transactions.is_empty());
        assert!(fixtures.transactions.iter().any(|t| t.metadata.name.is_none()));
    }

    #[test]
    fn test_load_falls_back_per_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("user.json"),
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();

        let fixtures = Fixtures::load(dir.path()).unwrap();
        assert_eq!(fixtures.user.full_name(), "Ada Lovelace");
        assert_eq!(fixtures.wallet.ledger_balance, Some(500.0));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("wallet.json"), "{ not json").unwrap();

        let err = Fixtures::load(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
        assert!(err.to_string().contains("wallet.json"));
    }

    #[test]
    fn test_empty_mode_hides_transactions() {
        let state = AppState::new(
            Fixtures::builtin().unwrap(),
            ServeOptions {
                empty: true,
                ..Default::default()
            },
        );
        assert!(state.transactions().is_empty());
    }

    #[test]
    fn test_endpoint_display_is_path() {
        assert_eq!(Endpoint::Transactions.to_string(), "/transactions");
    }
}

#![allow(dead_code)]

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tempfile::TempDir;

use linkvault::api::handlers::{create_account_handler, health_handler, redirect_handler};
use linkvault::api::middleware::auth;
use linkvault::api::routes::protected_routes;
use linkvault::infrastructure::persistence::{FileAccountRepository, FileUrlRepository};
use linkvault::infrastructure::security::InMemorySessionRegistry;
use linkvault::state::{AppState, SharedAccountRepository};

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Everything a test needs: the wired state, direct store handles for
/// fixture setup, and the temp directory keeping the stores alive.
pub struct TestEnv {
    pub state: AppState,
    pub sessions: Arc<InMemorySessionRegistry>,
    pub account_repo: Arc<SharedAccountRepository>,
    pub url_repo: Arc<FileUrlRepository>,
    pub data_dir: TempDir,
}

pub fn create_test_env() -> TestEnv {
    let data_dir = TempDir::new().unwrap();
    let sessions = Arc::new(InMemorySessionRegistry::new());

    let account_repo = Arc::new(
        FileAccountRepository::open(data_dir.path().join("accounts"), sessions.clone()).unwrap(),
    );
    let url_repo = Arc::new(FileUrlRepository::open(data_dir.path().join("urls")).unwrap());

    let state = AppState::new(
        account_repo.clone(),
        url_repo.clone(),
        sessions.clone(),
        TEST_BASE_URL.to_string(),
    );

    TestEnv {
        state,
        sessions,
        account_repo,
        url_repo,
        data_dir,
    }
}

/// Builds the full route tree with authentication middleware, mirroring the
/// production router without its outer normalization layer.
pub fn app(state: AppState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/account", post(create_account_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .route("/{short_url_id}", get(redirect_handler))
        .with_state(state)
}

/// Creates an account through the service layer, returning its password.
pub async fn create_test_account(state: &AppState, id: &str) -> String {
    state.accounts.create_account(id).await.unwrap().password
}

/// Adds an HTTP Basic `Authorization` header to a test request.
///
/// `axum-test` only exposes a raw [`authorization`](axum_test::TestRequest::authorization)
/// helper, so this extension trait builds the `Basic base64(user:pass)` value the
/// way [`axum_auth::AuthBasic`] expects to decode it.
pub trait AuthBasicExt {
    fn authorization_basic(self, username: &str, password: &str) -> Self;
}

impl AuthBasicExt for axum_test::TestRequest {
    fn authorization_basic(self, username: &str, password: &str) -> Self {
        let encoded = base64_standard(format!("{username}:{password}").as_bytes());
        self.authorization(format!("Basic {encoded}"))
    }
}

/// Minimal standard (RFC 4648) base64 encoder with padding.
fn base64_standard(input: &[u8]) -> String {
    const ALPHABET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    for chunk in input.chunks(3) {
        let b0 = chunk[0] as u32;
        let b1 = *chunk.get(1).unwrap_or(&0) as u32;
        let b2 = *chunk.get(2).unwrap_or(&0) as u32;
        let n = (b0 << 16) | (b1 << 8) | b2;
        out.push(ALPHABET[((n >> 18) & 0x3f) as usize] as char);
        out.push(ALPHABET[((n >> 12) & 0x3f) as usize] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[((n >> 6) & 0x3f) as usize] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[(n & 0x3f) as usize] as char
        } else {
            '='
        });
    }
    out
}

use std::sync::Arc;

use auth::AccessGate;
use auth::TokenCodec;
use auth::TokenIssuer;
use auth::TokenLifetimes;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::hashing::Argon2CredentialHasher;
use auth_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over the in-memory store
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub codec: TokenCodec,
    pub lifetimes: TokenLifetimes,
    /// Keeps cookies between requests, like a browser.
    pub api_client: reqwest::Client,
    /// Sends only the cookies a test sets by hand.
    pub bare_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let lifetimes = TokenLifetimes::new(15, 7);
        let codec = Arc::new(TokenCodec::new(TEST_SECRET));
        let issuer = Arc::new(TokenIssuer::new(Arc::clone(&codec), lifetimes));
        let access_gate = Arc::new(AccessGate::new(codec));

        let repository = Arc::new(InMemoryUserRepository::new());
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repository),
            Arc::new(Argon2CredentialHasher::new()),
            issuer,
        ));

        let router = create_router(auth_service, access_gate, lifetimes);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            codec: TokenCodec::new(TEST_SECRET),
            lifetimes,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            bare_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request carrying a hand-built cookie
    pub fn get_with_cookie(&self, path: &str, name: &str, value: &str) -> reqwest::RequestBuilder {
        self.bare_client
            .get(format!("{}{}", self.address, path))
            .header(reqwest::header::COOKIE, format!("{}={}", name, value))
    }

    /// Helper to make POST request carrying a hand-built cookie
    pub fn post_with_cookie(&self, path: &str, name: &str, value: &str) -> reqwest::RequestBuilder {
        self.bare_client
            .post(format!("{}{}", self.address, path))
            .header(reqwest::header::COOKIE, format!("{}={}", name, value))
    }

    /// Register a user and return its id
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> UserId {
        let response = self
            .post("/signup")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        UserId::from_string(body["data"]["id"].as_str().unwrap()).unwrap()
    }

    /// Sign in through the cookie-keeping client
    pub async fn sign_in(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/signin")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Token for `subject` that expired a minute ago
    pub fn expired_token(&self, subject: &str) -> String {
        self.codec
            .encode(subject, chrono::Utc::now().timestamp() - 60)
            .unwrap()
    }
}

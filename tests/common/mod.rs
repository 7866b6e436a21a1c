#![allow(dead_code)]

use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;
use voyage::configuration::{load_settings, Credentials, Settings};
use voyage::store::InMemoryChatStore;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client.apps.googleusercontent.com";

pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryChatStore>,
    pub completion: MockServer,
    pub identity: MockServer,
    pub mapping: MockServer,
    pub images: MockServer,
    pub client: reqwest::Client,
}

fn test_settings(
    completion: &MockServer,
    identity: &MockServer,
    mapping: &MockServer,
    images: &MockServer,
) -> Settings {
    let mut settings = load_settings().expect("Failed to get configuration");
    settings.connectors.completion.base_url = completion.uri();
    settings.connectors.completion.timeout_secs = 2;
    settings.connectors.identity.tokeninfo_url = format!("{}/tokeninfo", identity.uri());
    settings.connectors.mapping.base_url = mapping.uri();
    settings.connectors.images.encyclopedia_url = images.uri();
    settings.connectors.images.stock_photo_url = images.uri();

    settings.with_credentials(Credentials {
        completion_api_key: "hf-test-key".to_string(),
        google_client_id: CLIENT_ID.to_string(),
        secret_key: "test-signing-secret".to_string(),
        mapping_api_key: "geo-test-key".to_string(),
        stock_photo_api_key: "pexels-test-key".to_string(),
    })
}

pub async fn spawn_app() -> TestApp {
    let completion = MockServer::start().await;
    let identity = MockServer::start().await;
    let mapping = MockServer::start().await;
    let images = MockServer::start().await;
    let settings = test_settings(&completion, &identity, &mapping, &images);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let store = Arc::new(InMemoryChatStore::new());

    let server = voyage::startup::run(listener, store.clone(), settings)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        store,
        completion,
        identity,
        mapping,
        images,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Make the identity provider vouch for `id_token`.
    pub async fn accept_id_token(&self, id_token: &str, email: &str, name: &str) {
        Mock::given(method("GET"))
            .and(path("/tokeninfo"))
            .and(query_param("id_token", id_token))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aud": CLIENT_ID,
                "iss": "https://accounts.google.com",
                "email": email,
                "name": name,
                "picture": format!("https://example.com/{}.png", name.to_lowercase()),
            })))
            .mount(&self.identity)
            .await;
    }

    pub async fn post_login(&self, id_token: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/auth/google"))
            .json(&json!({ "id_token": id_token }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sign a fresh user in through the login endpoint, returning the access token.
    pub async fn sign_in(&self, email: &str) -> String {
        let id_token = format!("google-token-for-{}", email);
        let name = email.split('@').next().unwrap_or(email).to_string();
        self.accept_id_token(&id_token, email, &name).await;

        let response = self.post_login(&id_token).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        body["access"].as_str().unwrap().to_string()
    }

    pub async fn model_replies(&self, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": reply } }]
            })))
            .mount(&self.completion)
            .await;
    }

    pub async fn send_message(&self, token: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/chat/message"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, token: &str, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, token: &str, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, token: &str, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// JSON bodies the completion endpoint received, in order.
    pub async fn completion_requests(&self) -> Vec<Value> {
        self.completion
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

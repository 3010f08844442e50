use serde_json::json;
use storefront::config::{BackendSettings, ServerSettings, Settings};
use storefront::startup::Application;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A running storefront wired to a wiremock stand-in for the IT Planet
/// backend, plus a cookie-keeping client acting as the browser.
pub struct TestApp {
    pub address: String,
    pub backend: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let backend = MockServer::start().await;

        let config = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            backend: BackendSettings { url: backend.uri() },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build test client");

        Self {
            address: format!("http://127.0.0.1:{port}"),
            backend,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Stub a successful backend login and sign the operator in.
    pub async fn log_in(&self) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "user": { "username": "admin", "location": "Nanded" }
            })))
            .mount(&self.backend)
            .await;

        let response = self
            .client
            .post(self.url("/login"))
            .form(&[
                ("email", "admin@itplanet.in"),
                ("password", "secret"),
                ("location", "Nanded"),
            ])
            .send()
            .await
            .expect("Failed to execute login request");

        assert!(
            response.status().is_redirection(),
            "login should redirect, got {}",
            response.status()
        );
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute GET request")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute POST request")
    }
}

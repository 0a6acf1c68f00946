//! Common test utilities for integration tests.

use greeting_service::config::Config;
use greeting_service::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the application on an ephemeral port and wait until it answers.
    pub async fn spawn() -> Self {
        let config = Config { port: 0 };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        Self { address }
    }
}

//! Shared harness for the HTTP integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use recipe_finder_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use test_context::AsyncTestContext;

/// Smallest byte sequence the image decoder accepts as a PNG.
pub const PNG_BYTES: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

/// Router backed by the random extractor with no simulated latency.
///
/// The vocabulary is kept at three items so an image upload always yields
/// `eggs`, `cheese` and `onions`.
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub async fn with_args(extra: &[&str]) -> Self {
        let mut argv = vec![
            "recipe-finder-api",
            "--extractor-latency-ms",
            "0",
            "--extractor-vocabulary",
            "eggs,cheese,onions",
            "--metrics-enabled",
            "false",
        ];
        argv.extend_from_slice(extra);

        let args = Arc::new(Args::parse_from(argv));
        let app_state = state(args).await.expect("failed to build app state");
        let router = router(app_state).expect("failed to build router");

        Self {
            server: TestServer::new(router).expect("failed to start test server"),
        }
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        TestApp::with_args(&[]).await
    }
}

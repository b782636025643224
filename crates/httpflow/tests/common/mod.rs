//! Shared helpers for integration tests

use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Build the runtime that hosts the wiremock server.
///
/// The client under test is blocking, so the server lives on its own
/// multi-thread runtime; worker threads keep serving while the test
/// thread sits inside `send()`. Keep the returned runtime alive for the
/// duration of the test.
pub fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to build test runtime")
}

/// Start a mock server on the given runtime.
pub fn start_server(rt: &Runtime) -> MockServer {
    rt.block_on(MockServer::start())
}

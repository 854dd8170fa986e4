/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The Bearly Used SDK instance. Shares one HTTP client across all
    /// handlers, so concurrent requests reuse connections to the backend.
    pub sdk: bearly_sdk::BearlySdk,
}

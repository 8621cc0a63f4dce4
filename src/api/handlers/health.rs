/// Health check
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

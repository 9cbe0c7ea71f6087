use axum::Json;
use serde_json::{json, Value};

/// Operations exposed under `/api`, reported by the self-test endpoint.
pub const OPERATIONS: [&str; 8] = [
    "generate-proposal",
    "generate-agreement",
    "generate-pdf",
    "generate-doc",
    "generate-proposal-pdf",
    "generate-proposal-doc",
    "generate-agreement-pdf",
    "generate-agreement-doc",
];

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}

/// GET /api/test
pub async fn self_test_handler() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Module loaded successfully",
        "availableOperations": OPERATIONS,
        "totalOperations": OPERATIONS.len()
    }))
}

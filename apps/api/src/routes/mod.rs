pub mod download;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers as drafting;
use crate::render::handlers as rendering;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/test", get(health::self_test_handler))
        // Drafting
        .route(
            "/api/generate-proposal",
            post(drafting::handle_generate_proposal),
        )
        .route(
            "/api/generate-agreement",
            post(drafting::handle_generate_agreement),
        )
        // Rendering caller-supplied text
        .route("/api/generate-pdf", post(rendering::handle_generate_pdf))
        .route("/api/generate-doc", post(rendering::handle_generate_doc))
        // Draft, then render
        .route(
            "/api/generate-proposal-pdf",
            post(drafting::handle_generate_proposal_pdf),
        )
        .route(
            "/api/generate-proposal-doc",
            post(drafting::handle_generate_proposal_doc),
        )
        .route(
            "/api/generate-agreement-pdf",
            post(drafting::handle_generate_agreement_pdf),
        )
        .route(
            "/api/generate-agreement-doc",
            post(drafting::handle_generate_agreement_doc),
        )
        .fallback(not_found)
        .with_state(state)
}

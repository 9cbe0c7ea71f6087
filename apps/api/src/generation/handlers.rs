//! Axum route handlers for the drafting API.
//!
//! Text endpoints return the model's prose as JSON. The `-pdf` / `-doc`
//! variants draft first, then render `"<projectName>\n\n<draft>"`.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::requester::{generate_agreement, generate_proposal};
use crate::models::brief::{AgreementBrief, ProjectBrief};
use crate::models::document::DocumentKind;
use crate::models::letterhead::Letterhead;
use crate::models::present;
use crate::render::handlers::{render_download, DownloadOptions};
use crate::routes::download::{require_fields, DocumentDownload};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRequest {
    pub project_details: Option<String>,
    pub project_name: Option<String>,
    pub pricing: Option<String>,
    pub extra_details: Option<String>,
    pub filename: Option<String>,
    pub title: Option<String>,
    pub letterhead: Option<Letterhead>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementRequest {
    pub project_details: Option<String>,
    pub project_name: Option<String>,
    pub pricing: Option<String>,
    pub party_a: Option<String>,
    pub party_b: Option<String>,
    pub extra_details: Option<String>,
    pub filename: Option<String>,
    pub title: Option<String>,
    pub letterhead: Option<Letterhead>,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: String,
}

impl ProposalRequest {
    /// Validates the required fields and builds the brief from trimmed values.
    pub fn brief(&self) -> Result<ProjectBrief, AppError> {
        let project_details = present(&self.project_details);
        let project_name = present(&self.project_name);
        let pricing = present(&self.pricing);
        require_fields(&[
            ("projectDetails", project_details),
            ("projectName", project_name),
            ("pricing", pricing),
        ])?;

        Ok(ProjectBrief {
            project_name: project_name.unwrap_or_default().to_string(),
            project_details: project_details.unwrap_or_default().to_string(),
            pricing: pricing.unwrap_or_default().to_string(),
            extra_details: present(&self.extra_details).map(str::to_string),
        })
    }
}

impl AgreementRequest {
    pub fn brief(&self) -> Result<AgreementBrief, AppError> {
        let project_details = present(&self.project_details);
        let project_name = present(&self.project_name);
        let pricing = present(&self.pricing);
        let party_a = present(&self.party_a);
        let party_b = present(&self.party_b);
        require_fields(&[
            ("projectDetails", project_details),
            ("projectName", project_name),
            ("pricing", pricing),
            ("partyA", party_a),
            ("partyB", party_b),
        ])?;

        Ok(AgreementBrief {
            project: ProjectBrief {
                project_name: project_name.unwrap_or_default().to_string(),
                project_details: project_details.unwrap_or_default().to_string(),
                pricing: pricing.unwrap_or_default().to_string(),
                extra_details: present(&self.extra_details).map(str::to_string),
            },
            party_a: party_a.unwrap_or_default().to_string(),
            party_b: party_b.unwrap_or_default().to_string(),
        })
    }
}

/// Body of an end-to-end document: the project name, a blank line, the draft.
fn titled_body(project_name: &str, draft: &str) -> String {
    format!("{project_name}\n\n{draft}")
}

// ────────────────────────────────────────────────────────────────────────────
// Text endpoints
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-proposal
pub async fn handle_generate_proposal(
    State(state): State<AppState>,
    payload: Result<Json<ProposalRequest>, JsonRejection>,
) -> Result<Json<DraftResponse>, AppError> {
    let Json(request) = payload?;
    let brief = request.brief()?;

    let data = generate_proposal(
        state.generator.as_ref(),
        &brief,
        state.config.empty_completion_policy,
    )
    .await
    .map_err(|e| AppError::upstream("Failed to generate proposal", e))?;

    Ok(Json(DraftResponse {
        success: true,
        message: "Proposal generated successfully",
        data,
    }))
}

/// POST /api/generate-agreement
pub async fn handle_generate_agreement(
    State(state): State<AppState>,
    payload: Result<Json<AgreementRequest>, JsonRejection>,
) -> Result<Json<DraftResponse>, AppError> {
    let Json(request) = payload?;
    let brief = request.brief()?;

    let data = generate_agreement(
        state.generator.as_ref(),
        &brief,
        state.config.empty_completion_policy,
    )
    .await
    .map_err(|e| AppError::upstream("Failed to generate agreement", e))?;

    Ok(Json(DraftResponse {
        success: true,
        message: "Agreement generated successfully",
        data,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// End-to-end document endpoints
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-proposal-pdf
pub async fn handle_generate_proposal_pdf(
    State(state): State<AppState>,
    payload: Result<Json<ProposalRequest>, JsonRejection>,
) -> Result<DocumentDownload, AppError> {
    let Json(request) = payload?;
    proposal_document(&state, request, DocumentKind::Pdf, "Failed to generate proposal PDF")
        .await
}

/// POST /api/generate-proposal-doc
pub async fn handle_generate_proposal_doc(
    State(state): State<AppState>,
    payload: Result<Json<ProposalRequest>, JsonRejection>,
) -> Result<DocumentDownload, AppError> {
    let Json(request) = payload?;
    proposal_document(&state, request, DocumentKind::Docx, "Failed to generate proposal DOC")
        .await
}

/// POST /api/generate-agreement-pdf
pub async fn handle_generate_agreement_pdf(
    State(state): State<AppState>,
    payload: Result<Json<AgreementRequest>, JsonRejection>,
) -> Result<DocumentDownload, AppError> {
    let Json(request) = payload?;
    agreement_document(&state, request, DocumentKind::Pdf, "Failed to generate agreement PDF")
        .await
}

/// POST /api/generate-agreement-doc
pub async fn handle_generate_agreement_doc(
    State(state): State<AppState>,
    payload: Result<Json<AgreementRequest>, JsonRejection>,
) -> Result<DocumentDownload, AppError> {
    let Json(request) = payload?;
    agreement_document(&state, request, DocumentKind::Docx, "Failed to generate agreement DOC")
        .await
}

async fn proposal_document(
    state: &AppState,
    request: ProposalRequest,
    kind: DocumentKind,
    failure_message: &str,
) -> Result<DocumentDownload, AppError> {
    let brief = request.brief()?;
    let draft = generate_proposal(
        state.generator.as_ref(),
        &brief,
        state.config.empty_completion_policy,
    )
    .await
    .map_err(|e| AppError::upstream(failure_message, e))?;

    render_download(
        state,
        titled_body(&brief.project_name, &draft),
        DownloadOptions {
            kind,
            filename: present(&request.filename),
            default_filename: "proposal",
            title: present(&request.title),
            letterhead: request.letterhead,
            failure_message,
        },
    )
    .await
}

async fn agreement_document(
    state: &AppState,
    request: AgreementRequest,
    kind: DocumentKind,
    failure_message: &str,
) -> Result<DocumentDownload, AppError> {
    let brief = request.brief()?;
    let draft = generate_agreement(
        state.generator.as_ref(),
        &brief,
        state.config.empty_completion_policy,
    )
    .await
    .map_err(|e| AppError::upstream(failure_message, e))?;

    render_download(
        state,
        titled_body(&brief.project.project_name, &draft),
        DownloadOptions {
            kind,
            filename: present(&request.filename),
            default_filename: "agreement",
            title: present(&request.title),
            letterhead: request.letterhead,
            failure_message,
        },
    )
    .await
}

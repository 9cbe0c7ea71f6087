//! Content Requester: turns a project brief into drafted prose.
//!
//! Flow: build prompt → one `TextGenerator::complete` call → apply the
//! empty-completion policy. No retries; the upstream error is wrapped and
//! returned to the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::prompts::{
    AGREEMENT_PROMPT_TEMPLATE, AGREEMENT_SYSTEM, PROPOSAL_PROMPT_TEMPLATE, PROPOSAL_SYSTEM,
};
use crate::llm_client::prompts::{render_template, PLAIN_TEXT_FORMAT_INSTRUCTION};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::brief::{AgreementBrief, ProjectBrief};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Which document the model is drafting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftKind {
    Proposal,
    Agreement,
}

impl DraftKind {
    pub fn label(&self) -> &'static str {
        match self {
            DraftKind::Proposal => "proposal",
            DraftKind::Agreement => "agreement",
        }
    }

    /// Text used when the model answers with nothing and the policy allows it.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftKind::Proposal => "No proposal generated.",
            DraftKind::Agreement => "No agreement generated.",
        }
    }
}

impl fmt::Display for DraftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What to do when the upstream call succeeds but returns no text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyCompletionPolicy {
    /// Substitute `DraftKind::placeholder()` and carry on.
    #[default]
    Placeholder,
    /// Treat the empty reply as an upstream failure.
    Fail,
}

impl FromStr for EmptyCompletionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(EmptyCompletionPolicy::Placeholder),
            "fail" | "error" => Ok(EmptyCompletionPolicy::Fail),
            other => Err(format!(
                "unknown empty completion policy '{other}' (expected 'placeholder' or 'fail')"
            )),
        }
    }
}

/// The text-generation call failed or returned nothing usable.
#[derive(Debug, Error)]
#[error("Failed to generate {kind}: {source}")]
pub struct UpstreamError {
    pub kind: DraftKind,
    #[source]
    pub source: LlmError,
}

impl UpstreamError {
    pub fn from_llm(kind: DraftKind, source: LlmError) -> Self {
        Self { kind, source }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Drafts a sales proposal for `brief`.
pub async fn generate_proposal(
    generator: &dyn TextGenerator,
    brief: &ProjectBrief,
    policy: EmptyCompletionPolicy,
) -> Result<String, UpstreamError> {
    let prompt = build_proposal_prompt(brief);
    info!("Drafting proposal for project '{}'", brief.project_name);
    request_text(generator, DraftKind::Proposal, PROPOSAL_SYSTEM, &prompt, policy).await
}

/// Drafts a two-party agreement for `brief`.
pub async fn generate_agreement(
    generator: &dyn TextGenerator,
    brief: &AgreementBrief,
    policy: EmptyCompletionPolicy,
) -> Result<String, UpstreamError> {
    let prompt = build_agreement_prompt(brief);
    info!(
        "Drafting agreement for project '{}'",
        brief.project.project_name
    );
    request_text(generator, DraftKind::Agreement, AGREEMENT_SYSTEM, &prompt, policy).await
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt building
// ────────────────────────────────────────────────────────────────────────────

/// `Additional Details: ...` plus newline, or nothing when there are none.
fn extra_details_line(brief: &ProjectBrief) -> String {
    brief
        .extra_details()
        .map(|extra| format!("Additional Details: {extra}\n"))
        .unwrap_or_default()
}

pub fn build_proposal_prompt(brief: &ProjectBrief) -> String {
    let extra = extra_details_line(brief);
    render_template(
        PROPOSAL_PROMPT_TEMPLATE,
        &[
            ("project_name", brief.project_name.as_str()),
            ("project_details", brief.project_details.as_str()),
            ("pricing", brief.pricing.as_str()),
            ("extra_details_line", extra.as_str()),
            ("format_instruction", PLAIN_TEXT_FORMAT_INSTRUCTION),
        ],
    )
}

pub fn build_agreement_prompt(brief: &AgreementBrief) -> String {
    let project = &brief.project;
    let extra = extra_details_line(project);
    render_template(
        AGREEMENT_PROMPT_TEMPLATE,
        &[
            ("project_name", project.project_name.as_str()),
            ("project_details", project.project_details.as_str()),
            ("pricing", project.pricing.as_str()),
            ("party_a", brief.party_a.as_str()),
            ("party_b", brief.party_b.as_str()),
            ("extra_details_line", extra.as_str()),
            ("format_instruction", PLAIN_TEXT_FORMAT_INSTRUCTION),
        ],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Upstream call
// ────────────────────────────────────────────────────────────────────────────

async fn request_text(
    generator: &dyn TextGenerator,
    kind: DraftKind,
    system: &str,
    prompt: &str,
    policy: EmptyCompletionPolicy,
) -> Result<String, UpstreamError> {
    let completion = generator
        .complete(system, prompt)
        .await
        .map_err(|e| UpstreamError::from_llm(kind, e))?;

    match completion.filter(|text| !text.trim().is_empty()) {
        Some(text) => Ok(text),
        None => match policy {
            EmptyCompletionPolicy::Placeholder => {
                warn!("Upstream returned no {kind} text; using placeholder");
                Ok(kind.placeholder().to_string())
            }
            EmptyCompletionPolicy::Fail => {
                Err(UpstreamError::from_llm(kind, LlmError::EmptyContent))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testing::StubGenerator;

    fn brief() -> ProjectBrief {
        ProjectBrief {
            project_name: "Acme Corp E-commerce Redesign".to_string(),
            project_details: "Mobile-first storefront with analytics".to_string(),
            pricing: "$75,000 - $95,000".to_string(),
            extra_details: None,
        }
    }

    fn agreement_brief() -> AgreementBrief {
        AgreementBrief {
            project: brief(),
            party_a: "Acme Corp, Delaware".to_string(),
            party_b: "Studio Nine LLC".to_string(),
        }
    }

    #[test]
    fn test_proposal_prompt_contains_fields_and_sections() {
        let prompt = build_proposal_prompt(&brief());
        assert!(prompt.contains("Project Name: Acme Corp E-commerce Redesign"));
        assert!(prompt.contains("Pricing: $75,000 - $95,000"));
        assert!(prompt.contains("- EXECUTIVE SUMMARY"));
        assert!(prompt.contains("- NEXT STEPS"));
        assert!(prompt.contains(PLAIN_TEXT_FORMAT_INSTRUCTION));
        assert!(!prompt.contains('{'), "all placeholders filled");
    }

    #[test]
    fn test_extra_details_line_only_when_present() {
        let without = build_proposal_prompt(&brief());
        assert!(!without.contains("Additional Details"));

        let mut with_extra = brief();
        with_extra.extra_details = Some("30% cart abandonment".to_string());
        let with = build_proposal_prompt(&with_extra);
        assert!(with.contains("Additional Details: 30% cart abandonment"));

        let mut blank_extra = brief();
        blank_extra.extra_details = Some("   ".to_string());
        assert!(!build_proposal_prompt(&blank_extra).contains("Additional Details"));
    }

    #[test]
    fn test_agreement_prompt_names_both_parties() {
        let prompt = build_agreement_prompt(&agreement_brief());
        assert!(prompt.contains("Party A: Acme Corp, Delaware"));
        assert!(prompt.contains("Party B: Studio Nine LLC"));
        assert!(prompt.contains("- Intellectual property rights"));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "placeholder".parse::<EmptyCompletionPolicy>(),
            Ok(EmptyCompletionPolicy::Placeholder)
        );
        assert_eq!(
            " FAIL ".parse::<EmptyCompletionPolicy>(),
            Ok(EmptyCompletionPolicy::Fail)
        );
        assert!("sometimes".parse::<EmptyCompletionPolicy>().is_err());
    }

    #[tokio::test]
    async fn test_generate_proposal_returns_model_text() {
        let stub = StubGenerator::text("EXECUTIVE SUMMARY\nGreat things.");
        let text = generate_proposal(&stub, &brief(), EmptyCompletionPolicy::Placeholder)
            .await
            .unwrap();
        assert_eq!(text, "EXECUTIVE SUMMARY\nGreat things.");
        let calls = stub.calls();
        assert_eq!(calls.len(), 1, "single attempt");
        assert_eq!(calls[0].0, PROPOSAL_SYSTEM);
    }

    #[tokio::test]
    async fn test_empty_completion_uses_placeholder() {
        let stub = StubGenerator::empty();
        let text = generate_agreement(
            &stub,
            &agreement_brief(),
            EmptyCompletionPolicy::Placeholder,
        )
        .await
        .unwrap();
        assert_eq!(text, "No agreement generated.");
    }

    #[tokio::test]
    async fn test_blank_completion_counts_as_empty() {
        let stub = StubGenerator::text("  \n ");
        let text = generate_proposal(&stub, &brief(), EmptyCompletionPolicy::Placeholder)
            .await
            .unwrap();
        assert_eq!(text, "No proposal generated.");
    }

    #[tokio::test]
    async fn test_empty_completion_fails_under_fail_policy() {
        let stub = StubGenerator::empty();
        let err = generate_proposal(&stub, &brief(), EmptyCompletionPolicy::Fail)
            .await
            .unwrap_err();
        assert!(matches!(err.source, LlmError::EmptyContent));
        assert_eq!(
            err.to_string(),
            "Failed to generate proposal: LLM returned empty content"
        );
    }

    #[tokio::test]
    async fn test_upstream_error_is_wrapped_with_original_message() {
        let stub = StubGenerator::failing(503, "The server is overloaded");
        let err = generate_agreement(
            &stub,
            &agreement_brief(),
            EmptyCompletionPolicy::Placeholder,
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, DraftKind::Agreement);
        let message = err.to_string();
        assert!(message.starts_with("Failed to generate agreement: "));
        assert!(message.contains("The server is overloaded"));
        assert_eq!(stub.calls().len(), 1, "no retry");
    }
}

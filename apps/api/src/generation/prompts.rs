// All LLM prompt constants for the drafting module.
// Reuses the cross-cutting format fragment from llm_client::prompts.

/// System prompt for proposal drafting.
pub const PROPOSAL_SYSTEM: &str = "You are a professional business proposal writer. \
    Create compelling, well-structured sales proposals that convert leads to customers.";

/// Proposal prompt template.
/// Replace: {project_name}, {project_details}, {pricing}, {extra_details_line},
///          {format_instruction}
pub const PROPOSAL_PROMPT_TEMPLATE: &str = r#"Create a professional sales proposal (not an email) formatted with clear headings,
based on the following project information:

Project Name: {project_name}
Project Details: {project_details}
Pricing: {pricing}
{extra_details_line}
The proposal should include these sections with clear headings:
- EXECUTIVE SUMMARY
- PROJECT OVERVIEW
- OUR APPROACH
- DELIVERABLES
- TIMELINE
- INVESTMENT
- NEXT STEPS

Use clear, professional headings in ALL CAPS for each section.
Make the content compelling and tailored to the specific project.

{format_instruction}"#;

/// System prompt for agreement drafting.
pub const AGREEMENT_SYSTEM: &str = "You are a legal document writer. \
    Create comprehensive, professional legal agreements that protect both parties' \
    interests while being clear and enforceable.";

/// Agreement prompt template.
/// Replace: {project_name}, {project_details}, {pricing}, {party_a}, {party_b},
///          {extra_details_line}, {format_instruction}
pub const AGREEMENT_PROMPT_TEMPLATE: &str = r#"Create a professional legal agreement between two parties, formatted with clear headings,
based on the following information:

Project Name: {project_name}
Project Details: {project_details}
Pricing: {pricing}
Party A: {party_a}
Party B: {party_b}
{extra_details_line}
The agreement should include:
- Clear identification of both parties
- Project scope and deliverables
- Terms and conditions
- Payment terms and schedule
- Timeline and milestones
- Intellectual property rights
- Confidentiality clauses
- Termination conditions
- Legal jurisdiction
- Professional legal formatting

{format_instruction}"#;

/// Structured inputs for a proposal draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBrief {
    pub project_name: String,
    pub project_details: String,
    pub pricing: String,
    pub extra_details: Option<String>,
}

/// Structured inputs for an agreement draft: a project plus both parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementBrief {
    pub project: ProjectBrief,
    pub party_a: String,
    pub party_b: String,
}

impl ProjectBrief {
    /// Extra details, if any were supplied with non-whitespace content.
    pub fn extra_details(&self) -> Option<&str> {
        self.extra_details
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageStyle;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend. `LlmClient` in production; built once at startup.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
    /// PDF page geometry, fonts and heading rules.
    pub page_style: PageStyle,
}

// PDF layout: letterhead placement, heading classification, word-wrap and pagination.
// Everything here is pure and CPU-bound; the render module runs it inside
// tokio::task::spawn_blocking.

pub mod classify;
pub mod font_metrics;
pub mod letterhead;
pub mod normalize;
pub mod page;
pub mod plan;
pub mod wrap;

// Re-export the public API consumed by the render module and application state.
pub use page::{default_page_style, PageStyle};
pub use plan::plan_document;

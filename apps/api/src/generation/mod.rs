// Proposal and agreement drafting.
// Builds prompts from a project brief and asks the injected TextGenerator for
// prose. All upstream calls go through llm_client; nothing here talks HTTP.

pub mod handlers;
pub mod prompts;
pub mod requester;

#[cfg(test)]
pub mod testing;

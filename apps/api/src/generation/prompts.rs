// Prompt composition for the generation endpoint. The per-type instruction
// templates live in the registry; this file holds the shared system prompt
// and the composition rule.

/// System prompt sent with every generation call, regardless of content type.
pub const GENERATION_SYSTEM: &str =
    "You are an expert at converting content into engaging social media posts, \
    captions, and threads.";

/// Composes the outbound user-role prompt: the instruction template followed
/// by the user's raw content, separated by a blank line. No escaping, no
/// truncation — length limits are the provider's concern.
pub fn compose_prompt(instruction: &str, content: &str) -> String {
    format!("{instruction}\n\n{content}")
}

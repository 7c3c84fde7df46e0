// Generation endpoint: validate, resolve the content type, compose the
// prompt, make one provider call. All LLM calls go through llm_client —
// no direct provider calls here.

pub mod handlers;
pub mod prompts;

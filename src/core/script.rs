use crate::core::prompt::build_prompt;
use crate::core::request::ScriptRequest;
use crate::error::{Error, Result};
use async_openai::{
    self,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use tracing::{debug, warn};

const SYSTEM_PROMPT: &str = "Eres experto en guiones de VSL.";
const MODEL: &str = "gpt-4o-mini";
const MAX_COMPLETION_TOKENS: u32 = 900;
const TEMPERATURE: f32 = 0.7;

/// Thin client around the chat-completion endpoint. Owns no logic beyond
/// request marshalling; provider errors surface verbatim to the caller.
#[derive(Clone)]
pub struct ScriptService {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
}

impl ScriptService {
    pub fn new() -> Self {
        Self {
            client: async_openai::Client::new(),
        }
    }

    /// Generates the raw VSL script for a request. Blocks the current
    /// request until the provider answers or fails; no timeout, no retry.
    pub async fn generate(&self, script_request: &ScriptRequest) -> Result<String> {
        let prompt = build_prompt(script_request);
        debug!(chars = prompt.len(), "built generation prompt");

        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .max_completion_tokens(MAX_COMPLETION_TOKENS)
            .temperature(TEMPERATURE)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let mut content = String::new();
        for choice in response.choices {
            match choice.message.content {
                Some(text) => content.push_str(&text),
                None => warn!("choice without text content in completion response"),
            }
        }

        if content.trim().is_empty() {
            return Err(Error::custom("El proveedor devolvió una respuesta vacía"));
        }

        Ok(content)
    }
}

impl Default for ScriptService {
    fn default() -> Self {
        Self::new()
    }
}

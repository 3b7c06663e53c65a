use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;

pub const MODEL: &str = "gpt-4";

#[derive(thiserror::Error, Debug)]
pub enum LlmError {
    #[error("chat completion request failed: {0}")]
    Api(#[from] OpenAIError),
    #[error("no choices in chat completion response")]
    NoChoices,
    #[error("no content in chat completion message")]
    NoContent,
}

/// Narrow seam over the chat-completion endpoint; pipeline tests run against
/// a canned stand-in instead of the live API.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Single-turn chat completions at a fixed temperature. No streaming, no
/// retries; a failed request surfaces to the caller.
pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
    temperature: f32,
}

impl OpenaiClient {
    pub fn new(api_key: String, temperature: f32) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
            temperature,
        }
    }
}

#[async_trait]
impl Generate for OpenaiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .temperature(self.temperature)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;
        log::info!("Response: {:?}", response);

        let content = response
            .choices
            .first()
            .ok_or(LlmError::NoChoices)?
            .message
            .content
            .clone()
            .ok_or(LlmError::NoContent)?;

        Ok(content.trim().to_string())
    }
}

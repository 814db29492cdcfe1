use resume_agent_core::{
    AzureOpenAiClient, Environment, ProviderError, Settings, VendorError, resolve_llm_credentials,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AzureOpenAiConfig;
use crate::traits::TextProvider;
use crate::types::{ChatMessage, GenerationArgs, MessageTemplate, SamplingParams};

#[derive(Debug)]
pub struct AzureOpenAiProvider {
    client: AzureOpenAiClient,
    model: String,
    sampling: SamplingParams,
    template: MessageTemplate,
}

impl AzureOpenAiProvider {
    pub fn new(
        config: AzureOpenAiConfig,
        settings: &Settings,
        env: &Environment,
    ) -> Result<Self, ProviderError> {
        let credentials = resolve_llm_credentials(&config.overrides(), settings, env)?;
        let client = AzureOpenAiClient::new(credentials, &config.client)?;
        let model = config
            .model
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| settings.ll_model.clone());

        let sampling = config.options.sampling();

        info!("Azure OpenAI provider initialized with model: {model}");
        Ok(Self {
            client,
            model,
            sampling,
            template: config.template,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn sampling(&self) -> SamplingParams {
        self.sampling
    }

    fn build_request<'a>(&'a self, prompt: &str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            messages: self.template.render(prompt),
            model: &self.model,
            temperature: self.sampling.temperature,
            top_p: self.sampling.top_p,
        }
    }
}

#[async_trait::async_trait]
impl TextProvider for AzureOpenAiProvider {
    fn name(&self) -> &'static str {
        "azure-openai"
    }

    async fn generate(
        &self,
        prompt: &str,
        generation_args: GenerationArgs,
    ) -> Result<String, ProviderError> {
        if !generation_args.is_empty() {
            warn!(?generation_args, "AzureOpenAiProvider - generation_args not used");
        }

        let request = self.build_request(prompt);
        let parsed: ChatCompletionResponse = self
            .client
            .post_json(&self.model, "/chat/completions", &request)
            .await
            .map_err(ProviderError::Generation)?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::Generation(VendorError::InvalidResponse(
                    "no choice content in response".to_string(),
                ))
            })?;

        info!("Azure OpenAI provider response: {content}");
        Ok(content)
    }
}

// top_k and max_tokens have no field here and can never reach the vendor.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    messages: Vec<ChatMessage>,
    model: &'a str,
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

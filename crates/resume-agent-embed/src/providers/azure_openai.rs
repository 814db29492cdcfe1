use resume_agent_core::{
    AzureOpenAiClient, Environment, ProviderError, Settings, VendorError,
    resolve_embedding_credentials,
};
use serde::{Deserialize, Serialize};

use crate::config::AzureOpenAiEmbeddingConfig;
use crate::traits::EmbeddingProvider;

#[derive(Debug)]
pub struct AzureOpenAiEmbeddingProvider {
    client: AzureOpenAiClient,
    model: String,
}

impl AzureOpenAiEmbeddingProvider {
    pub fn new(
        config: AzureOpenAiEmbeddingConfig,
        settings: &Settings,
        env: &Environment,
    ) -> Result<Self, ProviderError> {
        let credentials = resolve_embedding_credentials(&config.overrides(), settings, env)?;
        let client = AzureOpenAiClient::new(credentials, &config.client)?;
        let model = config
            .model
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| settings.embedding_model.clone());
        Ok(Self { client, model })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for AzureOpenAiEmbeddingProvider {
    fn name(&self) -> &'static str {
        "azure-openai"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let payload = EmbeddingRequest {
            input: text,
            model: &self.model,
        };
        let parsed: EmbeddingResponse = self
            .client
            .post_json(&self.model, "/embeddings", &payload)
            .await
            .map_err(ProviderError::Embedding)?;

        let mut data = parsed.data;
        data.sort_by_key(|it| it.index);
        let vector = data.into_iter().next().map(|it| it.embedding).ok_or_else(|| {
            ProviderError::Embedding(VendorError::InvalidResponse(
                "no embeddings in response".to_string(),
            ))
        })?;

        tracing::debug!(model = %self.model, dimensions = vector.len(), "embedding generated");
        Ok(vector)
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::net::TcpListener;

    use resume_agent_core::env::{AZURE_OPENAI_ENDPOINT, OPENAI_API_KEY};
    use resume_agent_core::DEFAULT_EMBEDDING_API_VERSION;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const EMBED_PATH: &str = "/openai/deployments/text-embedding-3-small/embeddings";

    fn provider_for(server: &MockServer) -> AzureOpenAiEmbeddingProvider {
        AzureOpenAiEmbeddingProvider::new(
            AzureOpenAiEmbeddingConfig::new()
                .with_api_key("emb-key")
                .with_endpoint(server.uri()),
            &Settings::default(),
            &Environment::empty(),
        )
        .expect("construct provider")
    }

    fn closed_port_uri() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("reserve addr");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn sends_input_and_model_and_returns_first_vector() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(EMBED_PATH))
            .and(query_param("api-version", DEFAULT_EMBEDDING_API_VERSION))
            .and(header("api-key", "emb-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "model": "text-embedding-3-small",
                "data": [{"object": "embedding", "index": 0, "embedding": [0.25, -0.5, 1.0]}],
                "usage": {"prompt_tokens": 3, "total_tokens": 3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let vector = provider_for(&server)
            .embed("Senior Rust engineer")
            .await
            .expect("embed");
        assert_eq!(vector, vec![0.25, -0.5, 1.0]);

        let requests = server.received_requests().await.expect("recording enabled");
        let body: Value = requests[0].body_json().expect("json body");
        assert_eq!(
            body,
            json!({"input": "Senior Rust engineer", "model": "text-embedding-3-small"})
        );
    }

    #[tokio::test]
    async fn picks_index_zero_when_data_is_unordered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(EMBED_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"index": 1, "embedding": [9.0]},
                    {"index": 0, "embedding": [1.0]}
                ]
            })))
            .mount(&server)
            .await;

        let vector = provider_for(&server).embed("text").await.expect("embed");
        assert_eq!(vector, vec![1.0]);
    }

    #[tokio::test]
    async fn empty_data_is_embedding_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(EMBED_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let err = provider_for(&server).embed("text").await.expect_err("empty");
        assert!(matches!(
            err,
            ProviderError::Embedding(VendorError::InvalidResponse(_))
        ));
        assert!(err.to_string().contains("error generating embedding"));
    }

    #[tokio::test]
    async fn vendor_rejection_is_wrapped_with_cause() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(EMBED_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("input too long"))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .embed(&"x".repeat(64))
            .await
            .expect_err("rejected");
        let cause = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(cause.contains("status=400"));
        assert!(cause.contains("input too long"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_embedding_error() {
        let provider = AzureOpenAiEmbeddingProvider::new(
            AzureOpenAiEmbeddingConfig::new()
                .with_api_key("k")
                .with_endpoint(closed_port_uri()),
            &Settings::default(),
            &Environment::empty(),
        )
        .expect("construct provider");

        let err = provider.embed("text").await.expect_err("connection refused");
        assert!(matches!(err, ProviderError::Embedding(VendorError::Http(_))));
    }

    #[test]
    fn resolves_credentials_from_environment_fallbacks() {
        let env = Environment::from_pairs([
            (OPENAI_API_KEY, "openai-key"),
            (AZURE_OPENAI_ENDPOINT, "https://env.example"),
        ]);
        let provider = AzureOpenAiEmbeddingProvider::new(
            AzureOpenAiEmbeddingConfig::new().with_model("text-embedding-3-large"),
            &Settings::default(),
            &env,
        )
        .expect("construct provider");
        assert_eq!(provider.model(), "text-embedding-3-large");
        assert_eq!(
            provider.client.deployment_url(provider.model(), "/embeddings"),
            "https://env.example/openai/deployments/text-embedding-3-large/embeddings?api-version=2024-12-01-preview"
        );
    }

    #[test]
    fn missing_endpoint_fails_construction() {
        let err = AzureOpenAiEmbeddingProvider::new(
            AzureOpenAiEmbeddingConfig::new().with_api_key("k"),
            &Settings::default(),
            &Environment::empty(),
        )
        .expect_err("no endpoint");
        assert!(matches!(err, ProviderError::MissingEndpoint));
    }
}

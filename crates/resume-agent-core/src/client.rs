use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::credentials::Credentials;
use crate::error::{ProviderError, VendorError};

#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Applied by the HTTP client. `None` means reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Authenticated handle to one Azure OpenAI resource.
///
/// Every adapter builds and owns its own handle; handles are not pooled or
/// shared between adapters.
#[derive(Debug)]
pub struct AzureOpenAiClient {
    credentials: Credentials,
    http: Client,
}

impl AzureOpenAiClient {
    pub fn new(credentials: Credentials, options: &ClientOptions) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self { credentials, http })
    }

    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn deployment_url(&self, model: &str, path: &str) -> String {
        let mut url = format!(
            "{}/openai/deployments/{}{}",
            self.credentials.endpoint.trim_end_matches('/'),
            model.trim().trim_matches('/'),
            path
        );
        if let Some(version) = self.credentials.api_version.as_deref() {
            url.push_str("?api-version=");
            url.push_str(version.trim());
        }
        url
    }

    /// POSTs `body` to the deployment path and decodes the JSON reply. The
    /// exchange runs on a worker task, see [`dispatch`].
    pub async fn post_json<B, R>(&self, model: &str, path: &str, body: &B) -> Result<R, VendorError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Send + 'static,
    {
        let payload = serde_json::to_value(body)?;
        tracing::debug!(model, path, "dispatching Azure OpenAI request");
        let request = self
            .http
            .post(self.deployment_url(model, path))
            .header("api-key", &self.credentials.api_key)
            .json(&payload);

        dispatch(async move {
            let res = request.send().await?;
            if !res.status().is_success() {
                let status = res.status().as_u16();
                let body = res.text().await.unwrap_or_default();
                return Err(VendorError::Api { status, body });
            }
            Ok(res.json::<R>().await?)
        })
        .await
    }
}

/// Runs `work` on a separate tokio task and waits for it.
///
/// Dropping the returned future detaches the task rather than aborting it, so
/// an in-flight vendor request always runs to completion.
pub async fn dispatch<F, T>(work: F) -> Result<T, VendorError>
where
    F: Future<Output = Result<T, VendorError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(work).await?
}

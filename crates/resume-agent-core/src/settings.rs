use serde::Deserialize;

use crate::env::Environment;

pub const DEFAULT_LL_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Process-wide application settings, the middle link of every credential
/// fallback chain.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub llm_api_key: Option<String>,
    pub llm_base_url: Option<String>,
    pub ll_model: String,
    pub embedding_api_key: Option<String>,
    pub embedding_base_url: Option<String>,
    pub embedding_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_base_url: None,
            ll_model: DEFAULT_LL_MODEL.to_string(),
            embedding_api_key: None,
            embedding_base_url: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env(env: &Environment) -> Self {
        let defaults = Self::default();
        let owned = |name: &str| env.get(name).map(ToString::to_string);
        Self {
            llm_api_key: owned("LLM_API_KEY"),
            llm_base_url: owned("LLM_BASE_URL"),
            ll_model: owned("LL_MODEL").unwrap_or(defaults.ll_model),
            embedding_api_key: owned("EMBEDDING_API_KEY"),
            embedding_base_url: owned("EMBEDDING_BASE_URL"),
            embedding_model: owned("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_named_variables() {
        let env = Environment::from_pairs([
            ("LLM_API_KEY", "llm-key"),
            ("LLM_BASE_URL", "https://llm.example"),
            ("EMBEDDING_MODEL", "text-embedding-3-large"),
            ("EMBEDDING_API_KEY", ""),
        ]);
        let settings = Settings::from_env(&env);
        assert_eq!(settings.llm_api_key.as_deref(), Some("llm-key"));
        assert_eq!(settings.llm_base_url.as_deref(), Some("https://llm.example"));
        assert_eq!(settings.ll_model, DEFAULT_LL_MODEL);
        assert_eq!(settings.embedding_model, "text-embedding-3-large");
        assert_eq!(settings.embedding_api_key, None);
    }

    #[test]
    fn json_document_fills_missing_fields_with_defaults() {
        let settings =
            Settings::from_json(r#"{"ll_model":"gpt-4.1","embedding_base_url":"https://emb"}"#)
                .expect("parse settings");
        assert_eq!(settings.ll_model, "gpt-4.1");
        assert_eq!(settings.embedding_base_url.as_deref(), Some("https://emb"));
        assert_eq!(settings.embedding_model, DEFAULT_EMBEDDING_MODEL);
        assert!(settings.llm_api_key.is_none());
    }
}

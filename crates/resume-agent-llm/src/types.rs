use serde::Serialize;
use serde_json::{Map, Value};

pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_TOP_P: f64 = 0.9;
pub const DEFAULT_USER_MESSAGE: &str = "Help me with my resume";

/// Per-call overrides supplied by callers. The Azure adapter logs and ignores
/// them in favour of its configured [`GenerationOptions`].
pub type GenerationArgs = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Sampling values actually sent to the vendor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

/// Named generation options fixed at construction time.
///
/// Only `temperature` and `top_p` are ever read. Anything else stored here
/// (`top_k`, `max_tokens`, ...) is kept for introspection but has no path
/// into a request.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    values: Map<String, Value>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.number("temperature", DEFAULT_TEMPERATURE),
            top_p: self.number("top_p", DEFAULT_TOP_P),
        }
    }

    fn number(&self, name: &str, default: f64) -> f64 {
        match self.values.get(name) {
            None | Some(Value::Null) => default,
            Some(value) => value.as_f64().unwrap_or_else(|| {
                tracing::warn!(option = name, %value, "ignoring non-numeric generation option");
                default
            }),
        }
    }
}

/// Shape of the two-turn exchange sent for every prompt: the prompt as the
/// system turn followed by a fixed user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub user_message: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            user_message: DEFAULT_USER_MESSAGE.to_string(),
        }
    }
}

impl MessageTemplate {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
        }
    }

    pub fn render(&self, prompt: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(prompt),
            ChatMessage::user(self.user_message.as_str()),
        ]
    }
}

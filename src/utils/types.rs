use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend model variants offered by the selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    #[default]
    Gpt,
    Claude,
    Gemini,
}

impl ModelId {
    pub fn all() -> Vec<ModelId> {
        vec![ModelId::Gpt, ModelId::Claude, ModelId::Gemini]
    }

    /// Wire identifier sent in the `model` field.
    pub fn id(&self) -> &'static str {
        match self {
            ModelId::Gpt => "gpt",
            ModelId::Claude => "claude",
            ModelId::Gemini => "gemini",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelId::Gpt => "GPT",
            ModelId::Claude => "Claude",
            ModelId::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::all()
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| format!("Unknown model: {}", s))
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: ModelId,
    pub message: String,
    /// Prior turns. Multi-turn context is not supported, so this is always empty.
    pub context: Vec<String>,
}

impl ChatRequest {
    pub fn new(model: ModelId, message: impl Into<String>) -> Self {
        Self {
            model,
            message: message.into(),
            context: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// Structured error payload some backends return alongside a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Detail as display text. Strings are used verbatim, other JSON is rendered compactly.
    /// An empty string counts as no detail.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

//! Configuration for the prompt gateway

use serde::{Deserialize, Serialize};

/// Default Generative Language API base
pub const DEFAULT_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gateway configuration
///
/// Everything except the API key has a working default.
/// Timeout policy belongs to the transport; the gateway
/// core never enforces one itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig
{   /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Model identifier
    pub model: String
  , /// API key, embedded in the endpoint URL as a
    /// query parameter
    pub api_key: String
  , /// Request timeout in seconds
    pub timeout_secs: Option<u64>
}

impl GatewayConfig
{   /// Create a configuration with defaults for
    /// everything but the key
    pub fn new(api_key: impl Into<String>) -> Self
    {   GatewayConfig
        {   api_base: None
          , model: DEFAULT_MODEL.to_string()
          , api_key: api_key.into()
          , timeout_secs: None
        }
    }

    /// Resolve the full generateContent endpoint
    ///
    /// The result embeds the credential; keep it out of
    /// log output.
    pub fn endpoint_url(&self) -> String
    {   let base = self.api_base
          .as_deref()
          .unwrap_or(DEFAULT_API_BASE);
        format!(
          "{}/models/{}:generateContent?key={}",
          base, self.model, self.api_key
        )
    }
}

//! The prompt gateway: validate, dispatch, extract

use std::sync::Arc;
use log::{debug, error, trace, warn};

use crate::config::GatewayConfig;
use crate::error::Error;
use crate::request::{GenerationRequest, GenerationResponse};
use crate::transport::{HttpReply, HttpTransport};

/// Finish reason the provider uses for safety blocks
const FINISH_REASON_SAFETY: &str = "SAFETY";

/// Forwards one prompt to the generateContent endpoint and
/// returns the generated text, or one of five error kinds
///
/// Holds only immutable state fixed at construction, so a
/// single gateway is safe to share across concurrent
/// callers. One attempt per call: no retries, no fallback.
pub struct PromptGateway
{   endpoint: String
  , transport: Arc<dyn HttpTransport>
}

impl PromptGateway
{   /// Create a gateway from resolved configuration and a
    /// transport handle
    pub fn new(
      config: &GatewayConfig
    , transport: Arc<dyn HttpTransport>
    ) -> Self
    {   debug!(
          "Creating PromptGateway for model: {}",
          config.model
        );
        PromptGateway
        {   endpoint: config.endpoint_url()
          , transport
        }
    }

    /// Send a single-turn prompt and extract the first
    /// candidate's text
    ///
    /// Stages run in order and the first failure wins:
    /// prompt validation, request build, dispatch, reply
    /// validation, text extraction.
    pub async fn generate(&self, prompt: &str)
      -> Result<String, Error>
    {   validate_prompt(prompt)?;

        let request
          = GenerationRequest::single_turn(prompt);
        trace!("generateContent request built");

        // Endpoint embeds the API key; never log it.
        let reply = self.transport
          .post_generate(&self.endpoint, &request)
          .await
          .map_err(|e| {
            error!("API communication failed: {}", e);
            Error::Communication(e.to_string())
          })?;

        let body = validate_reply(reply)?;
        extract_text(body)
    }
}

/// Reject empty and whitespace-only prompts before any
/// network activity
fn validate_prompt(prompt: &str) -> Result<(), Error>
{   if prompt.trim().is_empty()
    {   warn!("Prompt cannot be empty");
        return Err(Error::InvalidPrompt);
    }
    Ok(())
}

/// Check status and body presence on the transport reply
fn validate_reply(reply: HttpReply)
  -> Result<GenerationResponse, Error>
{   if !reply.is_success()
    {   let msg = format!(
          "API returned HTTP {}",
          reply.status
        );
        error!("{}", msg);
        return Err(Error::Api(msg));
    }

    match reply.body
    {   Some(body) => Ok(body)
      , None => {
          let msg = "No response body from API";
          error!("{}", msg);
          Err(Error::Api(msg.to_string()))
        }
    }
}

/// Walk candidates -> content -> parts -> text, first
/// missing element wins
///
/// The safety check sits before the content checks so a
/// safety block is reported even when content is absent.
fn extract_text(response: GenerationResponse)
  -> Result<String, Error>
{   let candidate = match response.candidates.first()
    {   None => {
          let msg = "No response candidates";
          warn!("{}", msg);
          return Err(Error::Content(msg.to_string()));
        }
      , Some(None) => {
          let msg = "Empty candidate data";
          warn!("{}", msg);
          return Err(Error::Content(msg.to_string()));
        }
      , Some(Some(candidate)) => candidate
    };

    if candidate.finish_reason.as_deref()
        == Some(FINISH_REASON_SAFETY)
    {   warn!("Response blocked by safety filters");
        return Err(Error::Safety);
    }

    let content = match &candidate.content
    {   Some(content) => content
      , None => {
          let msg = "Missing content in candidate";
          warn!("{}", msg);
          return Err(Error::Content(msg.to_string()));
        }
    };

    let part = match content.parts.first()
    {   None => {
          let msg = "No content parts available";
          warn!("{}", msg);
          return Err(Error::Content(msg.to_string()));
        }
      , Some(part) => part
    };

    match part.as_ref().and_then(|p| p.text.as_ref())
    {   Some(text) => Ok(text.clone())
      , None => {
          let msg = "Missing text in response";
          warn!("{}", msg);
          Err(Error::Content(msg.to_string()))
        }
    }
}

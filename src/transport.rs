//! HTTP transport collaborator for the gateway
//!
//! The gateway only needs "POST a JSON body, get back a
//! status code and a nullable typed body". That seam is a
//! trait so tests can script replies without a network.

use std::fmt;
use async_trait::async_trait;
use log::{error, trace};

use crate::request::{GenerationRequest, GenerationResponse};

/// Transport-level failure: connection error, timeout,
/// malformed response JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure(pub String);

impl fmt::Display for TransportFailure
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportFailure {}

/// Outcome of a dispatch: HTTP status plus the decoded
/// body, when one was present
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply
{   pub status: u16
  , pub body: Option<GenerationResponse>
}

impl HttpReply
{   /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool
    {   (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP client
///
/// Implementations must be thread-safe; the gateway is
/// shared across concurrent callers.
#[async_trait]
pub trait HttpTransport: Send + Sync
{   /// POST the request to the given endpoint and return
    /// the parsed reply
    async fn post_generate(
      &self
    , url: &str
    , request: &GenerationRequest
    ) -> Result<HttpReply, TransportFailure>;
}

/// Production transport backed by reqwest
pub struct ReqwestTransport
{   client: reqwest::Client
}

impl ReqwestTransport
{   /// Create a transport with reqwest defaults, plus an
    /// optional request timeout
    pub fn new(timeout_secs: Option<u64>)
      -> Result<Self, TransportFailure>
    {   let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs
        {   builder = builder.timeout(
              std::time::Duration::from_secs(secs)
            );
        }
        let client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          TransportFailure(e.to_string())
        })?;
        Ok(ReqwestTransport { client })
    }

    /// Wrap a caller-configured client (pooling, proxies,
    /// timeouts are the caller's policy)
    pub fn with_client(client: reqwest::Client) -> Self
    {   ReqwestTransport { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport
{   async fn post_generate(
      &self
    , url: &str
    , request: &GenerationRequest
    ) -> Result<HttpReply, TransportFailure>
    {   let response = self.client
          .post(url)
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            TransportFailure(e.to_string())
          })?;

        let status = response.status().as_u16();
        trace!("generateContent status: {}", status);

        // Non-2xx bodies carry provider error details the
        // gateway does not read; only decode on success.
        if !(200..300).contains(&status)
        {   return Ok(HttpReply
            {   status
              , body: None
            });
        }

        let text = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          TransportFailure(e.to_string())
        })?;

        if text.trim().is_empty()
        {   return Ok(HttpReply
            {   status
              , body: None
            });
        }

        // A literal JSON null body decodes to None here;
        // anything malformed is a transport failure.
        let body: Option<GenerationResponse>
          = serde_json::from_str(&text).map_err(|e| {
            error!("Parse error: {}", e);
            TransportFailure(e.to_string())
          })?;

        Ok(HttpReply
        {   status
          , body
        })
    }
}

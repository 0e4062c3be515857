//! promptgate: a single-turn prompt gateway for the Google
//! Generative Language (generateContent) API.
//!
//! One operation: hand [`PromptGateway::generate`] a text
//! prompt, get back the generated text or one of five
//! typed [`Error`] kinds. No streaming, no chat history,
//! no retries; the HTTP client is an injected collaborator
//! behind the [`HttpTransport`] trait.
//!
//! ```no_run
//! use std::sync::Arc;
//! use promptgate::{
//!   GatewayConfig, PromptGateway, ReqwestTransport
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::new(
//!   std::env::var("GEMINI_API_KEY")?
//! );
//! let transport = Arc::new(
//!   ReqwestTransport::new(config.timeout_secs)?
//! );
//! let gateway = PromptGateway::new(&config, transport);
//!
//! let text = gateway.generate("Say hello").await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;
pub mod request;
pub mod transport;
pub mod gateway;

pub use error::Error;
pub use config::GatewayConfig;
pub use request::{
  Candidate, Content, GenerationRequest,
  GenerationResponse, Part
};
pub use transport::{
  HttpReply, HttpTransport, ReqwestTransport,
  TransportFailure
};
pub use gateway::PromptGateway;

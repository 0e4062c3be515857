use std::fmt;

/// Error type for gateway operations
/// Implements Clone for sending through channels
///
/// Every kind is terminal: the gateway never retries
/// and never substitutes fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Prompt was empty or whitespace-only
    InvalidPrompt
  , /// Transport-level failure while dispatching
    /// (connection error, timeout, malformed JSON)
    Communication(String)
  , /// Provider returned a non-2xx status, or a
    /// successful status with no body
    Api(String)
  , /// Success response missing a structural element
    /// (candidates, content, parts, text)
    Content(String)
  , /// Generation blocked by the provider's safety filters
    Safety
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::InvalidPrompt => {
              write!(f, "Prompt cannot be empty")
            }
          , Error::Communication(msg) => {
              write!(f,
                "API communication failed: {}",
                msg
              )
            }
          , Error::Api(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::Content(msg) => {
              write!(f, "Response content error: {}", msg)
            }
          , Error::Safety => {
              write!(f,
                "Response blocked by safety filters"
              )
            }
        }
    }
}

impl std::error::Error for Error {}

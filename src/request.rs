//! Wire request and response types for generateContent

use serde::{Deserialize, Serialize};

/// A single content part (text only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part
{   /// Part text; the provider may omit it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>
}

/// Role-tagged ordered list of parts
/// Shared between the request and response directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content
{   /// "user" on the way out, "model" on the way back
    #[serde(default)]
    pub role: String
  , /// Entries stay Option so a JSON null inside the
    /// array is distinct from an empty array
    #[serde(default)]
    pub parts: Vec<Option<Part>>
}

/// Request body for a generateContent call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest
{   pub contents: Vec<Content>
}

impl GenerationRequest
{   /// Build the canonical single-turn request: exactly one
    /// "user" content entry holding exactly one part whose
    /// text is the prompt, verbatim
    pub fn single_turn(prompt: &str) -> Self
    {   GenerationRequest
        {   contents: vec![
              Content
              {   role: "user".to_string()
                , parts: vec![
                    Some(Part
                    {   text: Some(prompt.to_string())
                    })
                  ]
              }
            ]
        }
    }
}

/// One generated alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate
{   /// Why generation stopped ("STOP", "SAFETY", ...)
    #[serde(
      rename = "finishReason"
    , skip_serializing_if = "Option::is_none"
    )]
    pub finish_reason: Option<String>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>
}

/// Response body of a generateContent call
/// Fields the gateway does not read are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse
{   /// Absent list deserializes to empty
    #[serde(default)]
    pub candidates: Vec<Option<Candidate>>
}

//! Inbound request and response bodies for the relay API

use serde::{Deserialize, Serialize};

/// Body of `POST /generate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest
{   /// The prompt text; absent and `null` both decode to `None`
    #[serde(default)]
    pub prompt: Option<String>
}

impl GenerateRequest
{   /// Decode a raw body and return the prompt it carries
    pub fn prompt_from_body(body: &[u8])
      -> Result<String, crate::error::Error>
    {   let request: GenerateRequest = serde_json::from_slice(body)
          .map_err(|e| crate::error::Error::InvalidRequest(e.to_string()))?;
        request.into_prompt()
    }

    /// The prompt, or `MissingPrompt` when absent or empty
    pub fn into_prompt(self)
      -> Result<String, crate::error::Error>
    {   match self.prompt
        {   Some(prompt) if !prompt.is_empty() => Ok(prompt)
          , _ => Err(crate::error::Error::MissingPrompt)
        }
    }
}

/// Success envelope; upstream failures also land here as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse
{   pub response: String
}

/// Error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub error: String
}

impl From<&crate::error::Error> for ErrorResponse
{   fn from(e: &crate::error::Error) -> Self
    {   ErrorResponse { error: e.to_string() }
    }
}

use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

/// Outbound chat-completion payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest
{   pub messages: Vec<ChatMessage>
  , pub max_tokens: usize
  , pub model: String
}

impl ChatCompletionRequest
{   /// Exactly one system entry followed by exactly one user entry
    pub fn new(
      template: &crate::template::PromptTemplate
    , prompt: &str
    , model: &str
    , max_tokens: usize
    ) -> Self
    {   ChatCompletionRequest
        {   messages: vec![
              ChatMessage::system(template.system_message())
            , ChatMessage::user(prompt)
            ]
          , max_tokens
          , model: model.to_string()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub content: Option<String>
}

impl ChatCompletionResponse
{   /// Decode a 200 body and pull out the first choice's content
    pub fn extract_content(body: &str)
      -> Result<String, crate::error::Error>
    {   let parsed: ChatCompletionResponse = serde_json::from_str(body)
          .map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::MalformedResponse(e.to_string())
          })?;

        let choice = parsed.choices.into_iter().next()
          .ok_or_else(|| {
            error!("No choices in response");
            crate::error::Error::MalformedResponse(
              "response contained no choices".to_string()
            )
          })?;

        trace!("Finish reason: {:?}", choice.finish_reason);
        choice.message.content.ok_or_else(|| {
          error!("First choice has no content");
          crate::error::Error::MalformedResponse(
            "first choice has no message content".to_string()
          )
        })
    }
}

// ===== Chat Completions Client =====

/// HTTP client for an OpenAI-compatible chat-completions endpoint
///
/// Holds no per-request state; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient
{   config: crate::config::UpstreamConfig
  , http_client: reqwest::Client
}

impl ChatCompletionsClient
{   pub fn new(config: crate::config::UpstreamConfig)
      -> Result<Self, crate::error::Error>
    {   debug!(
          "Creating ChatCompletionsClient for {} (timeout {}s)",
          config.endpoint_url, config.timeout_secs
        );
        let http_client = reqwest::Client::builder()
          .timeout(config.timeout())
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;
        Ok(ChatCompletionsClient { config, http_client })
    }

    pub fn config(&self) -> &crate::config::UpstreamConfig
    {   &self.config
    }

    /// Build the payload for one prompt
    pub fn build_request(
      &self
    , template: &crate::template::PromptTemplate
    , prompt: &str
    ) -> ChatCompletionRequest
    {   ChatCompletionRequest::new(
          template,
          prompt,
          &self.config.model,
          self.config.max_tokens
        )
    }

    /// Send one payload and return the first choice's content
    pub async fn send(
      &self
    , request: &ChatCompletionRequest
    ) -> Result<String, crate::error::Error>
    {   let api_key = self.config.api_key()?;
        debug!("Sending chat completion for model: {}", request.model);
        trace!("Chat completion request: {:?}", request);

        let response = self.http_client
          .post(&self.config.endpoint_url)
          .header("Authorization", format!("Bearer {}", api_key))
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("Upstream response status: {}", status);

        let body = response.text().await
          .map_err(|e| {
            error!("Failed to read upstream body: {}", e);
            crate::error::Error::from(e)
          })?;

        // Only 200 carries a completion; 201/204 etc. are reported.
        if status != reqwest::StatusCode::OK
        {   error!("Upstream API error {}: {}", status.as_u16(), body);
            return Err(crate::error::Error::UpstreamStatus
            {   status: status.as_u16()
              , body
            });
        }

        ChatCompletionResponse::extract_content(&body)
    }
}

use log::{debug, info, warn};
use crate::providers::ChatCompletionsClient;
use crate::template::PromptTemplate;

/// Upstream client: wraps a prompt in the system message and forwards it
///
/// Stateless between calls. Cloning is cheap and clones may be used
/// concurrently.
#[derive(Debug, Clone)]
pub struct UpstreamClient
{   chat: ChatCompletionsClient
  , template: PromptTemplate
}

impl UpstreamClient
{   pub fn new(
      upstream: crate::config::UpstreamConfig
    , template: PromptTemplate
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating UpstreamClient for model: {}", upstream.model);
        Ok(UpstreamClient
        {   chat: ChatCompletionsClient::new(upstream)?
          , template
        })
    }

    /// Build a client from the full relay configuration
    pub fn from_config(config: &crate::config::RelayConfig)
      -> Result<Self, crate::error::Error>
    {   Self::new(config.upstream.clone(), config.template.clone())
    }

    pub fn template(&self) -> &PromptTemplate
    {   &self.template
    }

    pub fn upstream(&self) -> &crate::config::UpstreamConfig
    {   self.chat.config()
    }

    /// One exchange with the provider, failures kept typed
    pub async fn complete(&self, prompt: &str) -> crate::UpstreamReply
    {   let request = self.chat.build_request(&self.template, prompt);
        debug!("Forwarding prompt of {} chars", prompt.len());
        let reply = self.chat.send(&request).await;
        match &reply
        {   Ok(text) => info!("Upstream returned {} chars", text.len())
          , Err(e) => warn!("Upstream call failed: {}", e)
        }
        reply
    }

    /// One exchange with the provider, failures rendered as text
    ///
    /// Upstream failures come back as `Error: <status>, <body>` style
    /// strings instead of errors.
    pub async fn query(&self, prompt: &str) -> String
    {   match self.complete(prompt).await
        {   Ok(text) => text
          , Err(e) => e.to_string()
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[tokio::test]
    async fn query_renders_missing_key_as_text()
    {   let client = UpstreamClient::new(
          crate::config::UpstreamConfig::default(),
          PromptTemplate::default()
        ).unwrap();
        let text = client.query("a navbar").await;
        assert!(text.contains("HF_API_KEY"), "got: {}", text);
    }

    #[test]
    fn from_config_keeps_template()
    {   let mut config = crate::config::RelayConfig::default();
        config.template = PromptTemplate::new("Reply with YAML.").unwrap();
        let client = UpstreamClient::from_config(&config).unwrap();
        assert_eq!(client.template().system_message(), "Reply with YAML.");
        assert_eq!(client.upstream().max_tokens, 1000);
    }
}

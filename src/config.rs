//! Configuration for the relay server and its upstream provider

use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Environment variable holding the upstream API key
pub const API_KEY_ENV: &str = "HF_API_KEY";

pub const DEFAULT_ENDPOINT_URL: &str
  = "https://router.huggingface.co/nebius/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "Qwen/Qwen2.5-Coder-7B-Instruct-fast";

pub const DEFAULT_MAX_TOKENS: usize = 1000;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upstream chat-completion provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig
{   /// Full chat-completions URL
    pub endpoint_url: String
  , /// Bearer credential; only ever injected from the environment
    #[serde(skip)]
    pub api_key: Option<String>
  , /// Model identifier sent with every payload
    pub model: String
  , /// Token bound sent with every payload
    pub max_tokens: usize
  , /// Request timeout in seconds
    pub timeout_secs: u64
}

impl UpstreamConfig
{   /// The configured key, or `MissingApiKey` when unset or empty
    pub fn api_key(&self)
      -> Result<&str, crate::error::Error>
    {   match self.api_key.as_deref()
        {   Some(key) if !key.is_empty() => Ok(key)
          , _ => Err(crate::error::Error::MissingApiKey(
              API_KEY_ENV.to_string()
            ))
        }
    }

    pub fn has_api_key(&self) -> bool
    {   self.api_key().is_ok()
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig
{   fn default() -> Self
    {   UpstreamConfig
        {   endpoint_url: DEFAULT_ENDPOINT_URL.to_string()
          , api_key: None
          , model: DEFAULT_MODEL.to_string()
          , max_tokens: DEFAULT_MAX_TOKENS
          , timeout_secs: DEFAULT_TIMEOUT_SECS
        }
    }
}

// Keeps the key out of logs.
impl fmt::Debug for UpstreamConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("UpstreamConfig")
          .field("endpoint_url", &self.endpoint_url)
          .field(
            "api_key",
            &self.api_key.as_ref().map(|_| "<redacted>")
          )
          .field("model", &self.model)
          .field("max_tokens", &self.max_tokens)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

/// Listen address configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig
{   pub host: String
  , pub port: u16
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   host: "0.0.0.0".to_string()
          , port: 5000
        }
    }
}

/// Complete relay configuration, read once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig
{   pub server: ServerConfig
  , pub upstream: UpstreamConfig
  , pub template: crate::template::PromptTemplate
  , /// Surface upstream failures as 502/504 instead of inside a 200
    pub strict_upstream: bool
}

impl RelayConfig
{   /// Check everything except the API key, whose absence is reported
    /// per request
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   let url = &self.upstream.endpoint_url;
        if !(url.starts_with("http://") || url.starts_with("https://"))
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!("endpoint URL must be http(s): {}", url)
            ));
        }
        if self.upstream.model.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "model must not be empty".to_string()
            ));
        }
        if self.upstream.max_tokens == 0
        {   return Err(crate::error::Error::InvalidConfiguration(
              "max_tokens must be positive".to_string()
            ));
        }
        if self.upstream.timeout_secs == 0
        {   return Err(crate::error::Error::InvalidConfiguration(
              "timeout must be positive".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn defaults_match_hosted_provider()
    {   let config = RelayConfig::default();
        assert_eq!(config.upstream.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.upstream.max_tokens, 1000);
        assert_eq!(config.upstream.timeout(), Duration::from_secs(30));
        assert_eq!(config.server.port, 5000);
        assert!(!config.strict_upstream);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_api_key_counts_as_missing()
    {   let mut upstream = UpstreamConfig::default();
        assert!(!upstream.has_api_key());

        upstream.api_key = Some(String::new());
        assert_eq!(
          upstream.api_key(),
          Err(crate::error::Error::MissingApiKey(API_KEY_ENV.to_string()))
        );

        // Only the empty string is missing; whitespace is passed through.
        upstream.api_key = Some(" ".to_string());
        assert_eq!(upstream.api_key(), Ok(" "));

        upstream.api_key = Some("hf_secret".to_string());
        assert_eq!(upstream.api_key(), Ok("hf_secret"));
    }

    #[test]
    fn api_key_is_redacted_and_not_serialized()
    {   let upstream = UpstreamConfig
        {   api_key: Some("hf_secret".to_string())
          , ..UpstreamConfig::default()
        };
        let debug = format!("{:?}", upstream);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("<redacted>"));

        let json = serde_json::to_string(&upstream).unwrap();
        assert!(!json.contains("hf_secret"));
    }

    #[test]
    fn deserialized_config_checks_template()
    {   let mut json = serde_json::to_value(RelayConfig::default()).unwrap();
        json["template"] = serde_json::json!("Reply with YAML.");
        let config: RelayConfig = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(config.template.system_message(), "Reply with YAML.");
        assert!(config.upstream.api_key.is_none());

        json["template"] = serde_json::json!("   ");
        assert!(serde_json::from_value::<RelayConfig>(json).is_err());
    }

    #[test]
    fn validate_rejects_bad_values()
    {   let mut config = RelayConfig::default();
        config.upstream.endpoint_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = RelayConfig::default();
        config.upstream.max_tokens = 0;
        assert!(config.validate().is_err());

        let mut config = RelayConfig::default();
        config.upstream.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}

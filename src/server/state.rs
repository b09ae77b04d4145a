use std::sync::Arc;
use log::{info, warn};

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState
{   pub client: crate::client::UpstreamClient
  , /// Map upstream failures to error statuses instead of a 200
    pub strict_upstream: bool
}

impl AppState
{   pub fn new(
      client: crate::client::UpstreamClient
    , strict_upstream: bool
    ) -> Self
    {   AppState { client, strict_upstream }
    }

    /// Validate the configuration and build the state once at startup
    pub fn from_config(config: &crate::config::RelayConfig)
      -> Result<Arc<Self>, crate::error::Error>
    {   config.validate()?;
        if !config.upstream.has_api_key()
        {   warn!(
              "{} is not set; /generate will answer 500 until it is",
              crate::config::API_KEY_ENV
            );
        }
        if config.strict_upstream
        {   info!("Strict upstream mode: failures map to 502/504");
        }
        let client = crate::client::UpstreamClient::from_config(config)?;
        Ok(Arc::new(AppState::new(client, config.strict_upstream)))
    }
}

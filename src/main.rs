use std::path::PathBuf;
use clap::Parser;
use log::{debug, info};
use prompt_relay::config::{
  RelayConfig, ServerConfig, UpstreamConfig, API_KEY_ENV,
  DEFAULT_ENDPOINT_URL, DEFAULT_MODEL
};
use prompt_relay::PromptTemplate;

#[derive(Parser, Debug)]
#[command(name = "prompt-relay")]
#[command(about = "Forward prompts to a chat-completions API behind a fixed system message", long_about = None)]
struct Args
{   /// Listen host
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String

  , /// Listen port
    #[arg(short, long, default_value_t = 5000, env = "PORT")]
    port: u16

  , /// Chat-completions URL of the upstream provider
    #[arg(long, default_value = DEFAULT_ENDPOINT_URL, env = "UPSTREAM_URL")]
    endpoint_url: String

  , /// Model identifier sent upstream
    #[arg(short, long, default_value = DEFAULT_MODEL, env = "UPSTREAM_MODEL")]
    model: String

  , /// Token bound sent upstream
    #[arg(long, default_value_t = 1000, env = "MAX_TOKENS")]
    max_tokens: usize

  , /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 30, env = "UPSTREAM_TIMEOUT_SECS")]
    timeout_secs: u64

  , /// File holding the system message; defaults to the built-in MUI one
    #[arg(long, env = "SYSTEM_MESSAGE_FILE")]
    system_message_file: Option<PathBuf>

  , /// Inline system message, used when no file is given
    #[arg(long, env = "SYSTEM_MESSAGE", hide_env_values = true)]
    system_message: Option<String>

  , /// Answer 502/504 on upstream failure instead of a 200 with error text
    #[arg(long, env = "UPSTREAM_STRICT")]
    strict_upstream: bool

  , /// Upstream API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>
}

impl Args
{   fn into_config(self)
      -> Result<RelayConfig, prompt_relay::Error>
    {   let template = match (&self.system_message_file, self.system_message)
        {   (Some(path), _) => PromptTemplate::from_file(path)?
          , (None, Some(message)) => PromptTemplate::new(message)?
          , (None, None) => PromptTemplate::default()
        };

        Ok(RelayConfig
        {   server: ServerConfig
            {   host: self.host
              , port: self.port
            }
          , upstream: UpstreamConfig
            {   endpoint_url: self.endpoint_url
              , api_key: self.api_key
              , model: self.model
              , max_tokens: self.max_tokens
              , timeout_secs: self.timeout_secs
            }
          , template
          , strict_upstream: self.strict_upstream
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   // A missing .env is fine; variables may come from the process env.
    let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    match dotenv
    {   Ok(path) => info!("Loaded environment from {}", path.display())
      , Err(e) => debug!("No .env loaded: {}", e)
    }

    let config = Args::parse().into_config()?;
    debug!("Configuration: {:?}", config);

    prompt_relay::server::serve(&config).await?;
    Ok(())
}

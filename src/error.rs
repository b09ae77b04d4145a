use std::fmt;

/// Custom error type for relay operations
/// Implements Clone so a failure can be rendered more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Inbound request had no usable prompt
    MissingPrompt
  , /// Upstream API key is not configured
    MissingApiKey(String)
  , /// Inbound body could not be decoded
    InvalidRequest(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Transport-level failure talking to upstream
    HttpError(String)
  , /// Upstream answered with a status other than 200
    UpstreamStatus
    {   status: u16
      , body: String
    }
  , /// Upstream answered 200 but without the expected shape
    MalformedResponse(String)
  , /// Upstream did not answer in time
    Timeout
  , /// Filesystem error while loading configuration
    Io(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// HTTP status a caller sees when this error is surfaced directly
    pub fn status_code(&self) -> u16
    {   match self
        {   Error::MissingPrompt
          | Error::InvalidRequest(_) => 400
          , Error::UpstreamStatus { .. }
          | Error::HttpError(_)
          | Error::MalformedResponse(_) => 502
          , Error::Timeout => 504
          , Error::MissingApiKey(_)
          | Error::InvalidConfiguration(_)
          | Error::Io(_)
          | Error::Other(_) => 500
        }
    }

    /// True for failures that originate at the upstream provider
    pub fn is_upstream(&self) -> bool
    {   matches!(
          self,
          Error::UpstreamStatus { .. }
            | Error::HttpError(_)
            | Error::MalformedResponse(_)
            | Error::Timeout
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingPrompt => {
              write!(f, "No prompt provided")
            }
          , Error::MissingApiKey(var) => {
              write!(f,
                "API key is missing. Set {} in the environment or .env file.",
                var
              )
            }
          , Error::InvalidRequest(msg) => {
              write!(f, "Invalid request body: {}", msg)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "Error: request failed, {}", msg)
            }
          , Error::UpstreamStatus { status, body } => {
              write!(f, "Error: {}, {}", status, body)
            }
          , Error::MalformedResponse(msg) => {
              write!(f, "Error: malformed upstream response, {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Error: upstream request timed out")
            }
          , Error::Io(msg) => {
              write!(f, "I/O error: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

impl From<std::io::Error> for Error
{   fn from(e: std::io::Error) -> Self
    {   Error::Io(e.to_string())
    }
}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_decode()
        {   Error::MalformedResponse(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}

pub mod error;
pub mod config;
pub mod template;
pub mod providers;
pub mod request;
pub mod client;
pub mod server;

/*

prompt-relay: a small HTTP service that takes a free-text prompt,
wraps it in one fixed system message, forwards it to an
OpenAI-compatible chat-completions endpoint and hands back the
model's raw text.

prompt-relay/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports
│   ├── main.rs         # CLI, .env loading, logger, serve
│   ├── error.rs        # Error type and HTTP status mapping
│   ├── config.rs       # Upstream/server configuration
│   ├── template.rs     # System message policy
│   ├── request.rs      # /generate request and response bodies
│   ├── client.rs       # Upstream client (query / complete)
│   ├── providers/
│   │   ├── mod.rs
│   │   └── chat_completions.rs   # Wire types and HTTP call
│   └── server/
│       ├── mod.rs      # Router and serve loop
│       ├── handler.rs  # GET / and POST /generate
│       ├── response.rs # Error -> HTTP response
│       └── state.rs    # Shared read-only state
└── tests/
    └── integration_tests.rs

*/

/// RELAY API INTERFACE:

/// Result of one upstream exchange: the extracted text, or the
/// failure (non-200 status, malformed body, transport, timeout)
pub type UpstreamReply = Result<String, crate::error::Error>;

pub use client::UpstreamClient;
pub use config::{RelayConfig, ServerConfig, UpstreamConfig};
pub use error::Error;
pub use request::{ErrorResponse, GenerateRequest, GenerateResponse};
pub use template::PromptTemplate;

use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use crate::request::{GenerateRequest, GenerateResponse};
use super::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the AI Code Generator API!";

/// GET /
pub async fn home() -> &'static str
{   WELCOME_MESSAGE
}

/// POST /generate
///
/// The prompt is checked before the credential. Outside strict mode an
/// upstream failure is still a 200 whose `response` holds the error text.
pub async fn generate(
  State(state): State<Arc<AppState>>
, body: Bytes
) -> Response
{   let prompt = match GenerateRequest::prompt_from_body(&body)
    {   Ok(prompt) => prompt
      , Err(e) => return e.into_response()
    };

    if let Err(e) = state.client.upstream().api_key()
    {   return e.into_response();
    }

    debug!("generate: strict={}", state.strict_upstream);
    if state.strict_upstream
    {   match state.client.complete(&prompt).await
        {   Ok(response) => Json(GenerateResponse { response }).into_response()
          , Err(e) => e.into_response()
        }
    } else
    {   let response = state.client.query(&prompt).await;
        Json(GenerateResponse { response }).into_response()
    }
}

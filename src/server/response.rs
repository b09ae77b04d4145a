use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use crate::request::ErrorResponse;

impl IntoResponse for crate::error::Error
{   fn into_response(self) -> Response
    {   let status = StatusCode::from_u16(self.status_code())
          .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error()
        {   error!("Responding {}: {}", status.as_u16(), self);
        } else
        {   warn!("Responding {}: {}", status.as_u16(), self);
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde_json::json;
use tracing::{error, info, warn};

use crate::api::resend_mailer::{MailError, OutboundEmail};
use crate::handlers::email_dtos::{ContactRequest, SendEmailResponse};
use crate::utils::email_template::{self, RequestMeta};
use crate::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("failed to send email: {0}")]
    Mail(#[from] MailError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(SendEmailResponse::failed(self.to_string()))).into_response()
    }
}

fn client_ip(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub async fn send_email(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ContactRequest>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    if let Err(reason) = req.validate() {
        warn!("Rejected contact request: {}", reason);
        return Err(ApiError::Validation(reason));
    }

    let meta = RequestMeta {
        received_on: Local::now().date_naive(),
        client_ip: client_ip(&headers),
    };

    let email = OutboundEmail {
        from: state.mail.from.clone(),
        to: state.mail.to.clone(),
        subject: email_template::subject(&req),
        html: email_template::render_notification(&req, &meta),
    };

    match state.mailer.send(email).await {
        Ok(id) => {
            info!("Contact request from plan '{}' delivered as {}", req.plan, id);
            Ok(Json(SendEmailResponse::sent(json!({ "id": id }))))
        }
        Err(e) => {
            error!("Error sending email: {}", e);
            Err(ApiError::Mail(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn client_ip_takes_the_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(&headers), None);

        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.9, 10.0.0.1"));
        assert_eq!(client_ip(&headers), Some("203.0.113.9"));
    }

    #[test]
    fn errors_map_to_status_codes() {
        let response = ApiError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Mail(MailError::Provider("down".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiErrorBody;

/// Why a request was turned away before reaching a protected handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    MissingToken,
    InvalidFormat,
    InvalidToken,
}

impl GateRejection {
    pub fn message(&self) -> &'static str {
        match self {
            GateRejection::MissingToken => "No token provided",
            GateRejection::InvalidFormat => "Invalid token format",
            GateRejection::InvalidToken => "Invalid or expired token",
        }
    }
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiErrorBody {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

/// Verifies the bearer token and attaches the caller's identity to the request.
///
/// Applied as a route layer, so handlers behind it can rely on an
/// `Extension<AuthenticatedUser>` being present.
pub async fn require_auth(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, GateRejection> {
    let token = extract_bearer_token(req.headers().get(AUTHORIZATION))?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Token verification failed");
        GateRejection::InvalidToken
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user ID");
        GateRejection::InvalidToken
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

/// Accepts exactly `Bearer <token>`: one space, one non-empty token.
fn extract_bearer_token(header: Option<&HeaderValue>) -> Result<&str, GateRejection> {
    let header = header.ok_or(GateRejection::MissingToken)?;
    let value = header.to_str().map_err(|_| GateRejection::InvalidFormat)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(GateRejection::InvalidFormat),
    }
}

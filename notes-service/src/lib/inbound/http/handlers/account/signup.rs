use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let body = body.map(|Json(body)| body).unwrap_or_else(absent_body);

    state
        .user_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// A body that is missing or not a JSON object carries no credentials.
pub(super) fn absent_body<T: Default>(rejection: JsonRejection) -> T {
    tracing::debug!(reason = %rejection.body_text(), "Unreadable credentials body");
    T::default()
}

/// Both fields are optional so that a missing one is reported the same way as
/// an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    email: Option<String>,
    password: Option<String>,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupCommand, UserError> {
        let (email, password) = match (self.email, self.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => return Err(UserError::MissingCredentials),
        };

        Ok(SignupCommand::new(EmailAddress::new(email)?, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub id: String,
    pub email: String,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

use crate::auth::models::{JwtClaims, UserContext};
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use doclicitante_core::AppError;
use doclicitante_db::UserRepository;
use jsonwebtoken::{decode, DecodingKey, Validation};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub jwt_secret: String,
    pub user_repository: UserRepository,
}

/// Verify the bearer token and attach a `UserContext` to the request.
///
/// The user row is upserted on every authenticated request so a profile
/// exists the first time an identity shows up; the identity provider remains
/// the source of truth for the id and email.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let token = match auth_header.strip_prefix("Bearer ") {
        Some(token) => token,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Authorization header must use the Bearer scheme".to_string(),
            ))
            .into_response();
        }
    };

    let claims = match decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(auth_state.jwt_secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => data.claims,
        Err(err) => {
            tracing::debug!(error = %err, "Token verification failed");
            return HttpAppError(AppError::Unauthorized(
                "Invalid or expired token".to_string(),
            ))
            .into_response();
        }
    };

    let user = match auth_state
        .user_repository
        .ensure_user(claims.sub, &claims.email)
        .await
    {
        Ok(user) => user,
        Err(err) => return HttpAppError(err).into_response(),
    };

    request.extensions_mut().insert(UserContext {
        user_id: user.id,
        email: user.email.clone(),
        user,
    });

    next.run(request).await
}

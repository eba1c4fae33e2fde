use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use streakwise_core::users::{UpsertUser, User};

use crate::main_lib::AppState;

/// Settings for verifying access tokens issued by the identity provider.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Vec<u8>,
    pub issuer: Option<String>,
    pub audience: String,
    pub leeway_secs: u64,
}

pub struct AuthManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    code: u16,
    message: String,
}

/// Profile fields the identity provider places in `user_metadata`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, alias = "picture")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: Option<usize>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

impl Claims {
    fn into_upsert(self) -> UpsertUser {
        let metadata = self.user_metadata.unwrap_or_default();
        UpsertUser {
            id: self.sub,
            email: self.email,
            first_name: metadata.first_name,
            last_name: metadata.last_name,
            profile_image_url: metadata.avatar_url,
        }
    }
}

/// The verified caller, attached to each authenticated request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl AuthManager {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_secs;
        validation.set_audience(&[config.audience.as_str()]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer.as_str()]);
        }
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|err| {
            tracing::debug!("Rejected bearer token: {:?}", err.kind());
            AuthError::Unauthorized
        })?;

        if data.claims.sub.trim().is_empty() {
            return Err(AuthError::Unauthorized);
        }
        Ok(data.claims)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::Internal(msg) => {
                tracing::error!("Authentication failed internally: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        let body = Json(AuthErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

/// Accepts either a raw shared secret or a `base64:`-prefixed encoding of one.
pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    let decoded = match trimmed.strip_prefix("base64:") {
        Some(encoded) => BASE64
            .decode(encoded.trim())
            .map_err(|e| anyhow::anyhow!("JWT secret is not valid base64: {e}"))?,
        None => trimmed.as_bytes().to_vec(),
    };
    if decoded.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    Ok(decoded)
}

fn bearer_token(request: &Request<Body>) -> Result<&str, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return Err(AuthError::Unauthorized);
    };
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::Unauthorized);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized);
    }
    Ok(token)
}

/// Verifies the bearer token, upserts the caller and attaches them as a
/// [`CurrentUser`] extension.
pub async fn require_jwt(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = state.auth.validate_token(bearer_token(&request)?)?;

    let user = state
        .user_service
        .upsert_user(claims.into_upsert())
        .await
        .map_err(|e| AuthError::Internal(format!("Failed to upsert user: {e}")))?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

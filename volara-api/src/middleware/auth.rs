use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use volara_core::identity::User;
use volara_store::user_repo;

use crate::error::{internal, AppError};
use crate::state::{AppState, AuthConfig};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

/// The authenticated account, injected into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Sign a bearer token for a user. Admin tokens live longer, per the
/// configured expirations.
pub fn issue_token(auth: &AuthConfig, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let ttl = if user.is_admin() {
        auth.admin_expiration
    } else {
        auth.expiration
    };

    let claims = Claims {
        sub: user.id_users,
        email: user.email.clone(),
        role: user.role.clone(),
        exp: (Utc::now() + Duration::seconds(ttl as i64)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.secret.as_bytes()),
    )
}

pub fn decode_claims(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Validate the bearer token and re-resolve the account it names. A token
/// whose user has since been deleted is rejected.
async fn resolve_user(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Accès non autorisé, token manquant".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::AuthenticationError("Accès non autorisé, token manquant".to_string())
    })?;

    let claims = decode_claims(&state.auth.secret, token)
        .map_err(|_| AppError::AuthenticationError("Token invalide ou expiré".to_string()))?;

    let user = user_repo::get(&state.db.pool, claims.sub)
        .await
        .map_err(internal("resolve_user"))?
        .ok_or_else(|| AppError::AuthenticationError("Utilisateur non trouvé".to_string()))?;

    Ok(user)
}

/// Layer for routes any signed-in user may reach.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = resolve_user(&state, req.headers()).await?;
    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

/// Extractor for admin-only handlers; used where a route path mixes public
/// reads with admin writes and a router-wide layer would gate both.
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = resolve_user(state, &parts.headers).await?;
        if !user.is_admin() {
            return Err(AppError::AuthorizationError(
                "Accès non autorisé, privilèges administrateur requis".to_string(),
            ));
        }
        Ok(AdminUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            secret: "unit-test-secret".to_string(),
            expiration: 86400,
            admin_expiration: 604800,
        }
    }

    fn user(role: &str) -> User {
        User {
            id_users: 7,
            nom: "Martin".to_string(),
            prenom: "Claire".to_string(),
            email: "claire@example.com".to_string(),
            telephone: None,
            role: role.to_string(),
        }
    }

    #[test]
    fn token_round_trip_preserves_identity() {
        let auth = auth_config();
        let token = issue_token(&auth, &user("user")).unwrap();
        let claims = decode_claims(&auth.secret, &token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "claire@example.com");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn admin_tokens_expire_later() {
        let auth = auth_config();
        let user_claims = decode_claims(
            &auth.secret,
            &issue_token(&auth, &user("user")).unwrap(),
        )
        .unwrap();
        let admin_claims = decode_claims(
            &auth.secret,
            &issue_token(&auth, &user("admin")).unwrap(),
        )
        .unwrap();
        assert!(admin_claims.exp > user_claims.exp);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let auth = auth_config();
        let token = issue_token(&auth, &user("user")).unwrap();
        assert!(decode_claims("another-secret", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = auth_config();
        let claims = Claims {
            sub: 7,
            email: "claire@example.com".to_string(),
            role: "user".to_string(),
            // Well past the default validation leeway.
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(auth.secret.as_bytes()),
        )
        .unwrap();
        assert!(decode_claims(&auth.secret, &token).is_err());
    }
}

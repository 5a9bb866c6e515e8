use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use volara_core::identity::{Credentials, NewUser, User, UserUpdate};
use volara_store::user_repo;

use crate::error::{internal, AppError};
use crate::middleware::auth::{issue_token, require_auth};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct AuthResponse {
    user: User,
    token: String,
    #[serde(rename = "expiresIn")]
    expires_in: String,
}

fn expiry_label(user: &User) -> String {
    if user.is_admin() {
        "7 jours".to_string()
    } else {
        "24 heures".to_string()
    }
}

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_users))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .layer(axum::middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}

async fn register(
    State(state): State<AppState>,
    Json(new): Json<NewUser>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    if user_repo::find_by_email(&state.db.pool, &new.email)
        .await
        .map_err(internal("register"))?
        .is_some()
    {
        return Err(AppError::ValidationError(
            "Cet email est déjà utilisé".to_string(),
        ));
    }

    let user = user_repo::create(&state.db.pool, &new)
        .await
        .map_err(internal("register"))?;
    let token = issue_token(&state.auth, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            expires_in: expiry_label(&user),
            token,
            user,
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = user_repo::authenticate(&state.db.pool, &credentials.email, &credentials.password)
        .await
        .map_err(internal("login"))?
        .ok_or_else(|| {
            AppError::AuthenticationError("Email ou mot de passe incorrect".to_string())
        })?;

    let token = issue_token(&state.auth, &user)?;

    Ok(Json(AuthResponse {
        expires_in: expiry_label(&user),
        token,
        user,
    }))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = user_repo::list(&state.db.pool)
        .await
        .map_err(internal("list_users"))?;
    Ok(Json(users))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, AppError> {
    let user = user_repo::get(&state.db.pool, id)
        .await
        .map_err(internal("get_user"))?
        .ok_or_else(|| AppError::NotFoundError("Utilisateur non trouvé".to_string()))?;
    Ok(Json(user))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(upd): Json<UserUpdate>,
) -> Result<Json<User>, AppError> {
    let user = user_repo::update(&state.db.pool, id, &upd)
        .await
        .map_err(internal("update_user"))?
        .ok_or_else(|| AppError::NotFoundError("Utilisateur non trouvé".to_string()))?;
    Ok(Json(user))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    if user_repo::delete(&state.db.pool, id)
        .await
        .map_err(internal("delete_user"))?
        == 0
    {
        return Err(AppError::NotFoundError("Utilisateur non trouvé".to_string()));
    }
    Ok(Json(json!({ "message": "Utilisateur supprimé avec succès" })))
}

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::{PgExecutor, PgPool};
use volara_core::identity::{NewUser, User, UserRecord, UserUpdate, ROLE_USER};

use crate::error::StoreError;

const PUBLIC_COLUMNS: &str = "id_users, nom, prenom, email, telephone, role";

pub async fn list(pool: &PgPool) -> Result<Vec<User>, StoreError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {PUBLIC_COLUMNS} FROM users ORDER BY id_users"
    ))
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn get(executor: impl PgExecutor<'_>, id: i32) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {PUBLIC_COLUMNS} FROM users WHERE id_users = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, StoreError> {
    let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(record)
}

pub async fn create(pool: &PgPool, new: &NewUser) -> Result<User, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(new.password.as_bytes(), &salt)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?
        .to_string();

    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (nom, prenom, email, password, telephone, role) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {PUBLIC_COLUMNS}"
    ))
    .bind(&new.nom)
    .bind(&new.prenom)
    .bind(&new.email)
    .bind(&hashed)
    .bind(&new.telephone)
    .bind(new.role.as_deref().unwrap_or(ROLE_USER))
    .fetch_one(pool)
    .await?;
    Ok(user)
}

pub async fn update(pool: &PgPool, id: i32, upd: &UserUpdate) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "UPDATE users SET nom = $1, prenom = $2, email = $3, telephone = $4, role = $5 \
         WHERE id_users = $6 RETURNING {PUBLIC_COLUMNS}"
    ))
    .bind(&upd.nom)
    .bind(&upd.prenom)
    .bind(&upd.email)
    .bind(&upd.telephone)
    .bind(&upd.role)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM users WHERE id_users = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Verify credentials against the stored argon2 hash. An unknown email and a
/// wrong password are indistinguishable to the caller.
pub async fn authenticate(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, StoreError> {
    let Some(record) = find_by_email(pool, email).await? else {
        return Ok(None);
    };

    let Ok(hash) = PasswordHash::new(&record.password) else {
        return Ok(None);
    };

    if Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
    {
        Ok(Some(record.into_public()))
    } else {
        Ok(None)
    }
}

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Full user row, including the password hash. Never serialized outward;
/// convert with [`UserRecord::into_public`] before returning it anywhere.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id_users: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password: String,
    pub telephone: Option<String>,
    pub role: String,
}

impl UserRecord {
    pub fn into_public(self) -> User {
        User {
            id_users: self.id_users,
            nom: self.nom,
            prenom: self.prenom,
            email: self.email,
            telephone: self.telephone,
            role: self.role,
        }
    }
}

/// Public projection of a user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id_users: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: Option<String>,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password: String,
    pub telephone: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserUpdate {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: Option<String>,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

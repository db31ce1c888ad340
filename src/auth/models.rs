//! Authentication data models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Tutor,
    Lecturer,
}

/// Registered account as the user store keeps it. Passwords are stored
/// as-is; hashing and session tokens are out of scope for this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

/// Sign-up payload; the store assigns the id
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

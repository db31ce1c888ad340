// src/auth/store.rs

use tracing::warn;

use super::models::{NewUser, User, UserType};

// ============================================================================
// User Store Repository
// ============================================================================

/// Injected repository over the registered-user collection, so the core
/// stays agnostic of where accounts actually live.
pub trait UserStore {
    fn all(&self) -> Vec<User>;
    fn add(&mut self, user: NewUser) -> User;
    fn delete(&mut self, id: u32);
}

/// Accounts registered out of the box
pub fn default_users() -> Vec<User> {
    vec![
        seed_user(1, "tutor1@example.com", UserType::Tutor),
        seed_user(2, "tutor2@example.com", UserType::Tutor),
        seed_user(3, "lecturer1@example.com", UserType::Lecturer),
        seed_user(4, "lecturer2@example.com", UserType::Lecturer),
    ]
}

fn seed_user(id: u32, email: &str, user_type: UserType) -> User {
    User {
        id,
        email: email.to_string(),
        password: "Password123!".to_string(),
        user_type,
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Store seeded with the default accounts
    pub fn new() -> Self {
        Self {
            users: default_users(),
        }
    }

    pub fn empty() -> Self {
        Self { users: Vec::new() }
    }

    /// Bootstrap from a persisted JSON snapshot, falling back to the
    /// default seed when the payload is unreadable
    pub fn from_json(payload: &str) -> Self {
        match serde_json::from_str::<Vec<User>>(payload) {
            Ok(users) => Self { users },
            Err(error) => {
                warn!(%error, "stored users unreadable, seeding defaults");
                Self::new()
            }
        }
    }

    /// Snapshot for persistence
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.users).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn all(&self) -> Vec<User> {
        self.users.clone()
    }

    /// New accounts take the highest existing id plus one
    fn add(&mut self, user: NewUser) -> User {
        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            email: user.email,
            password: user.password,
            user_type: user.user_type,
        };
        self.users.push(user.clone());
        user
    }

    fn delete(&mut self, id: u32) {
        self.users.retain(|user| user.id != id);
    }
}

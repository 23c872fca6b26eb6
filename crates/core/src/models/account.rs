//! Account and session models

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A registered account
///
/// Created on registration and never mutated afterwards. The password is
/// stored only as a salted argon2 hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: new_account_id(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// The password-free projection handed to callers
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// An account as exposed outside the directory, with the hash stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// The single active session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub account: AccountProfile,
    /// Whether the session is persisted across restarts
    pub remember: bool,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(account: AccountProfile, remember: bool) -> Self {
        Self {
            account,
            remember,
            started_at: Utc::now(),
        }
    }
}

/// Millisecond timestamp plus a random hex suffix
fn new_account_id() -> String {
    let suffix: u16 = rand::thread_rng().gen();
    format!("{}-{:04x}", Utc::now().timestamp_millis(), suffix)
}

//! Account directory and session management
//!
//! Manages the set of registered accounts and the single active session.
//! A session is in exactly one of three states: absent, active-remembered
//! (persisted across restarts), or active-not-remembered (held in memory
//! only). Logout always returns to absent.

mod email;
mod password;

use std::cell::RefCell;

use thiserror::Error;
use tracing::{info, instrument};

use crate::error::Error;
use crate::invariants;
use crate::models::{Account, AccountProfile, Session};
use crate::storage::{keys, Store};

pub use email::is_valid_email;
pub use password::PasswordStrength;

/// Why a registration or login was rejected
///
/// The `Display` strings are the user-facing reasons. Unknown identifiers
/// and wrong passwords share `InvalidCredentials` so a caller cannot tell
/// which part was wrong.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("All fields are required")]
    AllFieldsRequired,

    #[error("Username must be at least 3 characters")]
    UsernameTooShort,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password is too weak. Use at least 8 characters with uppercase, lowercase, and numbers.")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("User already exists with this email or username")]
    AlreadyExists,

    #[error("Email/Username and password are required")]
    CredentialsRequired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] Error),
}

/// Registration input
#[derive(Debug, Clone, Copy)]
pub struct NewAccount<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Login input
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub email_or_username: &'a str,
    pub password: &'a str,
    pub remember: bool,
}

/// The set of registered accounts plus the active session
pub struct AccountDirectory<'a> {
    store: &'a Store,
    /// Non-remembered sessions live here and nowhere else
    active: RefCell<Option<Session>>,
}

impl<'a> AccountDirectory<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            active: RefCell::new(None),
        }
    }

    /// Register a new account and activate its session
    ///
    /// Validation rules run in order and the first violation is returned;
    /// nothing is written on failure.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub fn register(&self, input: NewAccount<'_>) -> Result<AccountProfile, AuthError> {
        if input.username.is_empty()
            || input.email.is_empty()
            || input.password.is_empty()
            || input.confirm_password.is_empty()
        {
            return Err(AuthError::AllFieldsRequired);
        }

        if input.username.chars().count() < 3 {
            return Err(AuthError::UsernameTooShort);
        }

        if !email::is_valid_email(input.email) {
            return Err(AuthError::InvalidEmail);
        }

        if !PasswordStrength::classify(input.password).is_acceptable() {
            return Err(AuthError::WeakPassword);
        }

        if input.password != input.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let mut accounts = self.accounts();
        if accounts
            .iter()
            .any(|a| a.email == input.email || a.username == input.username)
        {
            return Err(AuthError::AlreadyExists);
        }

        let hash = password::hash_password(input.password)?;
        let account = Account::new(input.username.to_string(), input.email.to_string(), hash);
        let profile = account.profile();

        accounts.push(account);
        invariants::assert_directory_invariants(&accounts);
        self.store.set(keys::USERS, &accounts)?;

        self.activate(Session::new(profile.clone(), false))?;
        info!(username = %profile.username, "account registered");
        Ok(profile)
    }

    /// Log in by username or email
    #[instrument(skip(self, credentials), fields(identifier = %credentials.email_or_username))]
    pub fn login(&self, credentials: Credentials<'_>) -> Result<AccountProfile, AuthError> {
        if credentials.email_or_username.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::CredentialsRequired);
        }

        let account = self.accounts().into_iter().find(|a| {
            a.email == credentials.email_or_username || a.username == credentials.email_or_username
        });

        let Some(account) = account else {
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify_password(credentials.password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let profile = account.profile();
        self.activate(Session::new(profile.clone(), credentials.remember))?;
        info!(username = %profile.username, remember = credentials.remember, "login succeeded");
        Ok(profile)
    }

    /// End the active session
    ///
    /// Clears both the in-memory slot and any remembered copy in the store.
    pub fn logout(&self) -> Result<(), Error> {
        self.active.borrow_mut().take();
        self.store.remove(keys::SESSION)?;
        self.store.set(keys::REMEMBER, &false)?;
        info!("logged out");
        Ok(())
    }

    /// The active session's account, hash-free
    pub fn current_session(&self) -> Option<AccountProfile> {
        if let Some(session) = self.active.borrow().as_ref() {
            return Some(session.account.clone());
        }

        if self.store.get(keys::REMEMBER, false) {
            let session: Option<Session> = self.store.get(keys::SESSION, None);
            return session.map(|s| s.account);
        }

        None
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// All registered accounts
    fn accounts(&self) -> Vec<Account> {
        self.store.get(keys::USERS, Vec::new())
    }

    /// Make a session current, persisting it only when remembered
    fn activate(&self, session: Session) -> Result<(), Error> {
        if session.remember {
            self.store.set(keys::SESSION, &session)?;
            self.store.set(keys::REMEMBER, &true)?;
        } else {
            self.store.remove(keys::SESSION)?;
            self.store.set(keys::REMEMBER, &false)?;
        }

        *self.active.borrow_mut() = Some(session);
        Ok(())
    }
}

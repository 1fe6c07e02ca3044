use log::{debug, info};

/// A registered user. Plain-text password by design: this is a mock,
/// in-memory directory for a demo, not a credential store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// The currently authenticated user. At most one per directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("an account with email {0} already exists")]
    DuplicateEmail(String),
    #[error("no account matches that email and password")]
    InvalidCredentials,
}

/// Owns the registered accounts and the active session. Emails are the
/// unique key, compared case-sensitively; accounts are never updated or
/// deleted once stored.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
    session: Option<Session>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new account and logs it in, replacing any active session.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Session, AccountError> {
        if self.accounts.iter().any(|account| account.email == email) {
            return Err(AccountError::DuplicateEmail(email.to_string()));
        }

        self.accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
        });
        info!("registered account {}", email);

        let session = Session {
            email: email.to_string(),
            display_name: display_name.to_string(),
        };
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Succeeds only when both email and password match a stored account
    /// exactly. On success the matching account becomes the active session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AccountError> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.email == email && account.password == password)
            .ok_or(AccountError::InvalidCredentials)?;

        let session = Session {
            email: account.email.clone(),
            display_name: account.display_name.clone(),
        };
        info!("logged in as {}", session.email);
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Clears the active session. Safe to call when nobody is logged in.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("logged out {}", session.email);
        }
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

//! Session
//!
//! Local login gate. There is no credential check and no token: any
//! non-blank email and password open the session. Logging out drops all
//! store data.

use crate::error::{Error, Result};
use crate::services::ForecastApi;
use crate::states::PredictionStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the session when both fields are non-blank after trimming
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(Error::Invalid {
                message: "email and password are required".to_string(),
            });
        }

        tracing::info!(user = email, "Logged in");
        self.user = Some(email.to_string());
        Ok(())
    }

    /// Close the session and clear the store
    pub fn logout<A: ForecastApi>(&mut self, store: &PredictionStore<A>) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user, "Logged out");
        }
        store.reset();
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

use thiserror::Error;

use crate::api::{AuthClient, AuthError};
use crate::models::{User, UserUpdate};

/// Session-store operations that require an active user
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("No active session")]
    NoActiveSession,
}

/// In-memory holder of the authenticated user. At most one user is
/// active at a time and the session lives and dies with the process.
pub struct SessionStore {
    client: AuthClient,
    user: Option<User>,
}

impl SessionStore {
    pub fn new(client: AuthClient) -> Self {
        Self { client, user: None }
    }

    /// Sign in against the remote API and adopt the returned profile
    pub async fn authenticate(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.client.sign_in(email, password).await?;
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Create an account and adopt the returned profile
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let user = self.client.sign_up(name, email, password).await?;
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Drop the active session
    pub fn clear(&mut self) {
        if self.user.take().is_some() {
            tracing::info!("Session cleared");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Shallow-merge the populated update fields onto the active user
    /// and return the merged profile
    pub fn merge_update(&mut self, update: UserUpdate) -> Result<User, SessionError> {
        let user = self.user.as_mut().ok_or(SessionError::NoActiveSession)?;
        update.apply(user);
        Ok(user.clone())
    }
}

#[cfg(test)]
impl SessionStore {
    /// Store with a preloaded user, bypassing the network
    pub(crate) fn seeded(user: Option<User>) -> Self {
        let client = AuthClient::with_base_url(
            "http://localhost:0",
            std::time::Duration::from_secs(1),
        )
        .unwrap();
        Self { client, user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessLevel;

    fn sample_user() -> User {
        User {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            age: 31,
            weight: 80.0,
            height: 178.0,
            goal: "Lose weight".to_string(),
            fitness_level: FitnessLevel::Intermediate,
            preferred_workouts: vec!["Running".to_string()],
            weekly_goal: 4,
            photo: None,
        }
    }

    #[test]
    fn merge_update_changes_only_given_fields() {
        let mut store = SessionStore::seeded(Some(sample_user()));

        let merged = store
            .merge_update(UserUpdate {
                weight: Some(74.0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(merged.weight, 74.0);
        assert_eq!(merged.name, "Alex");
        assert_eq!(store.current_user().unwrap().weight, 74.0);
    }

    #[test]
    fn merge_update_without_session_fails() {
        let mut store = SessionStore::seeded(None);

        let result = store.merge_update(UserUpdate {
            weight: Some(74.0),
            ..Default::default()
        });

        assert_eq!(result, Err(SessionError::NoActiveSession));
    }

    #[test]
    fn clear_drops_the_user() {
        let mut store = SessionStore::seeded(Some(sample_user()));
        assert!(store.is_authenticated());

        store.clear();

        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }
}

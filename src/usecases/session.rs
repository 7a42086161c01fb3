//! Session Use Case - Demo login slot.
//!
//! The session lives under its own key, outside the document. There is
//! no credential check: any non-empty username/password pair logs in.

use tracing::{info, instrument, warn};

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::model::{Role, Session};
use crate::ports::storage::KeyValueStorage;

use super::store::Store;

impl<S: KeyValueStorage> Store<S> {
    /// Record a login, replacing any previous session.
    ///
    /// `role` defaults to `STAFF`.
    ///
    /// # Errors
    /// `Validation` if username or password is empty.
    #[instrument(skip(self, password))]
    pub async fn mock_login(
        &self,
        username: &str,
        password: &str,
        role: Option<Role>,
    ) -> StoreResult<Session> {
        if username.is_empty() || password.is_empty() {
            return Err(StoreError::validation("username and password are required"));
        }

        let session = Session {
            username: username.to_string(),
            role: role.unwrap_or_default(),
        };
        let json = serde_json::to_string(&session)?;
        self.storage.set(&self.session_key, &json).await?;

        info!(username = %session.username, role = %session.role, "Logged in");
        Ok(session)
    }

    /// Clear the session. Succeeds when nobody is logged in.
    #[instrument(skip(self))]
    pub async fn mock_logout(&self) -> StoreResult<()> {
        self.storage.remove(&self.session_key).await?;
        info!("Logged out");
        Ok(())
    }

    /// Current session, `None` when logged out or unreadable.
    pub async fn get_login(&self) -> Option<Session> {
        let raw = match self.storage.get(&self.session_key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Failed to read session");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "Stored session is corrupt, treating as logged out");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_SESSION_KEY;
    use crate::domain::model::Role;
    use crate::ports::storage::KeyValueStorage;
    use crate::usecases::test_support::test_store;

    #[tokio::test]
    async fn test_login_defaults_to_staff() {
        let store = test_store();
        let session = store.mock_login("amy", "pw", None).await.unwrap();
        assert_eq!(session.role, Role::Staff);
        assert_eq!(store.get_login().await, Some(session));
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let store = test_store();
        assert!(store.mock_login("", "pw", None).await.unwrap_err().is_validation());
        assert!(store.mock_login("amy", "", None).await.unwrap_err().is_validation());
        assert_eq!(store.get_login().await, None);
    }

    #[tokio::test]
    async fn test_login_overwrites_previous_session() {
        let store = test_store();
        store.mock_login("amy", "pw", None).await.unwrap();
        store
            .mock_login("bo", "pw", Some(Role::Courier))
            .await
            .unwrap();
        let current = store.get_login().await.unwrap();
        assert_eq!(current.username, "bo");
        assert_eq!(current.role, Role::Courier);
    }

    #[tokio::test]
    async fn test_logout_is_unconditional() {
        let store = test_store();
        store.mock_logout().await.unwrap();
        store.mock_login("amy", "pw", Some(Role::Customer)).await.unwrap();
        store.mock_logout().await.unwrap();
        assert_eq!(store.get_login().await, None);
    }

    #[tokio::test]
    async fn test_corrupt_session_reads_as_none() {
        let store = test_store();
        store
            .storage()
            .set(DEFAULT_SESSION_KEY, "[1,2")
            .await
            .unwrap();
        assert_eq!(store.get_login().await, None);
    }

    #[tokio::test]
    async fn test_session_not_part_of_document() {
        let store = test_store();
        store.mock_login("amy", "pw", None).await.unwrap();
        let doc = store.load_document().await.unwrap();
        assert_eq!(doc, crate::domain::model::Document::seed());
    }
}

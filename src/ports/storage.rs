//! Storage Port - Key-Value Persistence Interface
//!
//! The store keeps its whole state under two string keys: one holding
//! the serialized document and one holding the login session. Any
//! backend that can get, set and remove a string by key will do.

use async_trait::async_trait;

/// Trait for key-value storage providers.
///
/// Values are opaque strings (serialized JSON). Writes replace the
/// whole value; there is no partial update and no versioning, so
/// concurrent writers resolve as last write wins.
#[async_trait]
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Read the value under `key`, `None` if absent.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;

    /// Check if the backend is usable (directory present, writable).
    async fn is_healthy(&self) -> bool;
}

#[async_trait]
impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        (**self).remove(key).await
    }

    async fn is_healthy(&self) -> bool {
        (**self).is_healthy().await
    }
}

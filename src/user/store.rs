//! In-memory user store.

use tokio::sync::RwLock;
use tracing::debug;

use super::models::User;

/// Append-only store of accepted user records.
///
/// Records live for the lifetime of the process and are kept in insertion
/// order. The lock serializes appends, so concurrent registrations cannot
/// lose records.
#[derive(Debug, Default)]
pub struct UserStore {
    records: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all records in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.records.read().await.clone()
    }

    /// Append one record to the end of the store.
    ///
    /// Accepts any record unconditionally; validation is the caller's
    /// responsibility.
    pub async fn append(&self, user: User) {
        let mut records = self.records.write().await;
        records.push(user);
        debug!(total = records.len(), "appended user record");
    }

    /// Current number of stored records.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

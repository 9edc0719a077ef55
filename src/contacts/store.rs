//! Abstract contact data service and identity provider.
//!
//! The surrounding application keeps persons and groups in a remote
//! document database and observes live collection snapshots. These
//! traits are that boundary: the index pipeline depends only on them,
//! never on a concrete backend. [`super::memory::MemoryStore`] is the
//! in-process reference implementation.

use tokio::sync::watch;

use super::models::{Group, Person, User};
use crate::error::AppError;

/// Document-store operations on the persons and groups collections.
///
/// `watch_persons`/`watch_groups` return snapshot channels: every
/// committed mutation publishes the full updated collection, and a
/// receiver always observes the latest state. Dropping the receiver
/// cancels the subscription.
#[allow(async_fn_in_trait)]
pub trait ContactStore {
    async fn list_persons(&self) -> Result<Vec<Person>, AppError>;
    async fn list_groups(&self) -> Result<Vec<Group>, AppError>;

    async fn add_person(&self, person: Person) -> Result<(), AppError>;
    async fn add_group(&self, group: Group) -> Result<(), AppError>;

    /// Replaces the stored person with the same id. Unknown ids are an
    /// error.
    async fn update_person(&self, person: Person) -> Result<(), AppError>;

    /// Replaces the stored group with the same id. Unknown ids are an
    /// error.
    async fn update_group(&self, group: Group) -> Result<(), AppError>;

    async fn delete_person(&self, id: &str) -> Result<(), AppError>;
    async fn delete_group(&self, id: &str) -> Result<(), AppError>;

    fn watch_persons(&self) -> watch::Receiver<Vec<Person>>;
    fn watch_groups(&self) -> watch::Receiver<Vec<Group>>;
}

/// The identity-provider boundary: who is signed in right now.
pub trait UserProvider {
    fn current_user(&self) -> Option<User>;
}

/// Fixed-user provider for tests and local CLI runs.
#[derive(Debug, Clone, Default)]
pub struct StaticUserProvider {
    user: Option<User>,
}

impl StaticUserProvider {
    /// Provider that reports the given user as signed in.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Provider that reports no signed-in user.
    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl UserProvider for StaticUserProvider {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

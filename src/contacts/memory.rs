//! In-memory contact store with live snapshot channels.
//!
//! Reference implementation of [`ContactStore`] used by the CLI and
//! the integration tests. State lives behind tokio `RwLock`s; every
//! committed mutation publishes the full updated collection through a
//! `watch` channel, which is exactly the snapshot-per-change contract
//! the remote document store provides.

use tokio::sync::{RwLock, watch};
use tracing::{debug, instrument};

use super::models::{Group, Person};
use super::store::ContactStore;
use crate::constants::store::{GROUPS_CAPACITY, PERSONS_CAPACITY};
use crate::error::AppError;

pub struct MemoryStore {
    persons: RwLock<Vec<Person>>,
    groups: RwLock<Vec<Group>>,
    persons_tx: watch::Sender<Vec<Person>>,
    groups_tx: watch::Sender<Vec<Group>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (persons_tx, _) = watch::channel(Vec::new());
        let (groups_tx, _) = watch::channel(Vec::new());

        Self {
            persons: RwLock::new(Vec::with_capacity(PERSONS_CAPACITY)),
            groups: RwLock::new(Vec::with_capacity(GROUPS_CAPACITY)),
            persons_tx,
            groups_tx,
        }
    }

    /// Builds a store pre-populated with the given collections.
    /// Watchers created afterwards observe this state as their first
    /// snapshot.
    pub fn with_data(persons: Vec<Person>, groups: Vec<Group>) -> Self {
        let (persons_tx, _) = watch::channel(persons.clone());
        let (groups_tx, _) = watch::channel(groups.clone());

        Self {
            persons: RwLock::new(persons),
            groups: RwLock::new(groups),
            persons_tx,
            groups_tx,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemoryStore {
    async fn list_persons(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.persons.read().await.clone())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, AppError> {
        Ok(self.groups.read().await.clone())
    }

    #[instrument(skip(self, person), fields(person_id = %person.id))]
    async fn add_person(&self, person: Person) -> Result<(), AppError> {
        let mut persons = self.persons.write().await;
        persons.push(person);
        debug!("Added person, collection size: {}", persons.len());
        self.persons_tx.send_replace(persons.clone());
        Ok(())
    }

    #[instrument(skip(self, group), fields(group_id = %group.id))]
    async fn add_group(&self, group: Group) -> Result<(), AppError> {
        let mut groups = self.groups.write().await;
        groups.push(group);
        debug!("Added group, collection size: {}", groups.len());
        self.groups_tx.send_replace(groups.clone());
        Ok(())
    }

    #[instrument(skip(self, person), fields(person_id = %person.id))]
    async fn update_person(&self, person: Person) -> Result<(), AppError> {
        let mut persons = self.persons.write().await;
        let slot = persons
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or_else(|| AppError::person_not_found(&person.id))?;
        *slot = person;
        self.persons_tx.send_replace(persons.clone());
        Ok(())
    }

    #[instrument(skip(self, group), fields(group_id = %group.id))]
    async fn update_group(&self, group: Group) -> Result<(), AppError> {
        let mut groups = self.groups.write().await;
        let slot = groups
            .iter_mut()
            .find(|g| g.id == group.id)
            .ok_or_else(|| AppError::group_not_found(&group.id))?;
        *slot = group;
        self.groups_tx.send_replace(groups.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_person(&self, id: &str) -> Result<(), AppError> {
        let mut persons = self.persons.write().await;
        let before = persons.len();
        persons.retain(|p| p.id != id);
        if persons.len() == before {
            return Err(AppError::person_not_found(id));
        }
        self.persons_tx.send_replace(persons.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_group(&self, id: &str) -> Result<(), AppError> {
        // Hold the persons lock across the check so a concurrent
        // add_person cannot slip a member into a group being deleted.
        let persons = self.persons.read().await;
        let member_count = persons
            .iter()
            .filter(|p| p.group_id.as_deref() == Some(id))
            .count();
        if member_count > 0 {
            return Err(AppError::GroupNotEmpty {
                id: id.to_string(),
                person_count: member_count,
            });
        }

        let mut groups = self.groups.write().await;
        let before = groups.len();
        groups.retain(|g| g.id != id);
        if groups.len() == before {
            return Err(AppError::group_not_found(id));
        }
        self.groups_tx.send_replace(groups.clone());
        Ok(())
    }

    fn watch_persons(&self) -> watch::Receiver<Vec<Person>> {
        self.persons_tx.subscribe()
    }

    fn watch_groups(&self) -> watch::Receiver<Vec<Group>> {
        self.groups_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn person(id: &str, last_name: &str) -> Person {
        Person {
            id: id.to_string(),
            last_name: last_name.to_string(),
            first_name: String::new(),
            nickname: String::new(),
            last_name_furigana: None,
            first_name_furigana: None,
            group_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn group(id: &str, name: &str) -> Group {
        Group {
            id: id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_and_list_persons() {
        let store = MemoryStore::new();
        store.add_person(person("p-1", "Tanaka")).await.unwrap();
        store.add_person(person("p-2", "Suzuki")).await.unwrap();

        let persons = store.list_persons().await.unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].id, "p-1");
    }

    #[tokio::test]
    async fn test_update_unknown_person_is_error() {
        let store = MemoryStore::new();
        let err = store.update_person(person("p-9", "Ghost")).await.unwrap_err();
        assert!(matches!(err, AppError::PersonNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_person() {
        let store = MemoryStore::new();
        store.add_person(person("p-1", "Tanaka")).await.unwrap();

        store.delete_person("p-1").await.unwrap();
        assert!(store.list_persons().await.unwrap().is_empty());

        let err = store.delete_person("p-1").await.unwrap_err();
        assert!(matches!(err, AppError::PersonNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_group_with_members_is_rejected() {
        let store = MemoryStore::new();
        store.add_group(group("g-1", "友人")).await.unwrap();

        let mut member = person("p-1", "Tanaka");
        member.group_id = Some("g-1".to_string());
        store.add_person(member).await.unwrap();

        let err = store.delete_group("g-1").await.unwrap_err();
        assert!(matches!(err, AppError::GroupNotEmpty { .. }));

        store.delete_person("p-1").await.unwrap();
        store.delete_group("g-1").await.unwrap();
        assert!(store.list_groups().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_watch_persons_sees_every_committed_snapshot() {
        let store = MemoryStore::new();
        let mut rx = store.watch_persons();
        assert!(rx.borrow().is_empty());

        store.add_person(person("p-1", "Tanaka")).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.delete_person("p-1").await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn test_with_data_seeds_watchers() {
        let store =
            MemoryStore::with_data(vec![person("p-1", "Tanaka")], vec![group("g-1", "家族")]);

        assert_eq!(store.watch_persons().borrow().len(), 1);
        assert_eq!(store.watch_groups().borrow().len(), 1);
    }
}

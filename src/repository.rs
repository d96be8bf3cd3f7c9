//! Binds one record list to its snapshot in a [`KeyValueStore`].
//!
//! The list is read once when the repository is loaded and the complete
//! list is written back after every successful mutation.

use crate::models::{Exercise, Meal, ProgressEntry};
use crate::storage::{KeyValueStore, StoreError, read_snapshot, write_snapshot};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: &'static str,
}

/// A flat record type with its own storage key, seed list and add rules.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KEY: &'static str;
    const ADDED: &'static str;
    const REJECTED: &'static str;

    /// Shown on first run, or when the stored snapshot cannot be read.
    fn seed() -> Vec<Self>;

    fn is_valid(&self) -> bool;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError {
                message: Self::REJECTED,
            })
        }
    }
}

impl Record for Exercise {
    const KEY: &'static str = "workoutExercises";
    const ADDED: &'static str = "Exercise added successfully!";
    const REJECTED: &'static str =
        "Please enter a valid exercise name, positive sets/reps, and non-negative weight.";

    fn seed() -> Vec<Self> {
        vec![
            Exercise {
                name: "Bench Press".to_string(),
                sets: 3,
                reps: 10,
                weight: 60.0,
                date: None,
            },
            Exercise {
                name: "Squats".to_string(),
                sets: 4,
                reps: 8,
                weight: 80.0,
                date: None,
            },
        ]
    }

    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.sets > 0 && self.reps > 0 && self.weight >= 0.0
    }
}

impl Record for Meal {
    const KEY: &'static str = "nutritionMeals";
    const ADDED: &'static str = "Meal added successfully!";
    const REJECTED: &'static str =
        "Please enter a valid meal name and non-negative values for all fields.";

    fn seed() -> Vec<Self> {
        vec![
            Meal {
                name: "Breakfast".to_string(),
                calories: 450,
                protein: 20,
                carbs: 45,
                fat: 15,
                water: None,
                date: None,
            },
            Meal {
                name: "Lunch".to_string(),
                calories: 650,
                protein: 35,
                carbs: 60,
                fat: 25,
                water: None,
                date: None,
            },
        ]
    }

    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.calories >= 0
            && self.protein >= 0
            && self.carbs >= 0
            && self.fat >= 0
            && self.water.is_none_or(|water| water >= 0.0)
    }
}

impl Record for ProgressEntry {
    const KEY: &'static str = "progressEntries";
    const ADDED: &'static str = "Progress entry added successfully!";
    const REJECTED: &'static str =
        "Please enter a date, positive weight, and non-negative body fat %.";

    fn seed() -> Vec<Self> {
        vec![
            ProgressEntry {
                date: "2024-01-01".to_string(),
                weight: 75.0,
                body_fat: 20.0,
                notes: "Starting point".to_string(),
            },
            ProgressEntry {
                date: "2024-01-15".to_string(),
                weight: 74.0,
                body_fat: 19.0,
                notes: "Good progress".to_string(),
            },
        ]
    }

    fn is_valid(&self) -> bool {
        !self.date.trim().is_empty() && self.weight > 0.0 && self.body_fat >= 0.0
    }
}

#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    #[error("no record at position {index} (list has {len})")]
    NotFound { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Repository<R: Record> {
    store: Arc<dyn KeyValueStore>,
    items: Vec<R>,
}

impl<R: Record> Repository<R> {
    /// Loads the snapshot for `R::KEY`, falling back to the seed list when
    /// it is absent or unreadable.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = match read_snapshot::<R>(store.as_ref(), R::KEY).await {
            Ok(Some(items)) => {
                debug!(key = R::KEY, count = items.len(), "loaded snapshot");
                items
            }
            Ok(None) => {
                info!(key = R::KEY, "no snapshot yet, using seed data");
                R::seed()
            }
            Err(err @ StoreError::Corrupt { .. }) => {
                warn!(key = R::KEY, "{err}, using seed data");
                R::seed()
            }
            Err(err) => {
                error!(key = R::KEY, "{err}, using seed data");
                R::seed()
            }
        };
        Self { store, items }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Appends `draft` and persists the full list. A rejected draft
    /// leaves both the list and the snapshot untouched.
    pub async fn add(&mut self, draft: R) -> Result<&[R], MutationError> {
        draft.validate()?;
        let mut next = self.items.clone();
        next.push(draft);
        self.commit(next).await?;
        Ok(&self.items)
    }

    /// Removes the record at `index`, keeping the others in order.
    pub async fn delete(&mut self, index: usize) -> Result<R, MutationError> {
        if index >= self.items.len() {
            return Err(MutationError::NotFound {
                index,
                len: self.items.len(),
            });
        }
        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next).await?;
        Ok(removed)
    }

    /// Replaces the whole list.
    pub async fn replace(&mut self, items: Vec<R>) -> Result<(), MutationError> {
        self.commit(items).await
    }

    // The in-memory list only changes once the snapshot write succeeded.
    async fn commit(&mut self, next: Vec<R>) -> Result<(), MutationError> {
        write_snapshot(self.store.as_ref(), R::KEY, &next).await?;
        self.items = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    /// Reads nothing and refuses every write.
    struct ReadOnlyStore;

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        async fn set(&self, key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[tokio::test]
    async fn failed_write_keeps_list_on_add() {
        let mut repo = Repository::<Exercise>::load(Arc::new(ReadOnlyStore)).await;
        let row = Exercise {
            name: "Row".to_string(),
            sets: 3,
            reps: 12,
            weight: 40.0,
            date: None,
        };

        let err = repo.add(row).await.unwrap_err();
        assert!(matches!(err, MutationError::Store(StoreError::Io { .. })));
        assert_eq!(repo.items(), Exercise::seed().as_slice());
    }

    #[tokio::test]
    async fn failed_write_keeps_list_on_delete() {
        let mut repo = Repository::<ProgressEntry>::load(Arc::new(ReadOnlyStore)).await;

        let err = repo.delete(0).await.unwrap_err();
        assert!(matches!(err, MutationError::Store(StoreError::Io { .. })));
        assert_eq!(repo.items(), ProgressEntry::seed().as_slice());
    }

    #[tokio::test]
    async fn empty_store_loads_seed() {
        let repo = Repository::<Meal>::load(store()).await;
        assert_eq!(repo.items(), Meal::seed().as_slice());
    }

    #[tokio::test]
    async fn corrupt_snapshot_loads_seed() {
        let store = store();
        store
            .set(ProgressEntry::KEY, "[{\"date\":1}]".to_string())
            .await
            .unwrap();
        let repo = Repository::<ProgressEntry>::load(store.clone()).await;
        assert_eq!(repo.items(), ProgressEntry::seed().as_slice());
        // The bad snapshot stays where it is until the next mutation.
        assert_eq!(
            store.get(ProgressEntry::KEY).await.unwrap().as_deref(),
            Some("[{\"date\":1}]")
        );
    }

    #[tokio::test]
    async fn stored_empty_list_is_not_reseeded() {
        let store = store();
        store.set(Exercise::KEY, "[]".to_string()).await.unwrap();
        let repo = Repository::<Exercise>::load(store).await;
        assert!(repo.items().is_empty());
    }

    #[tokio::test]
    async fn add_persists_full_list() {
        let store = store();
        let mut repo = Repository::<Exercise>::load(store.clone()).await;
        let row = Exercise {
            name: "Row".to_string(),
            sets: 3,
            reps: 12,
            weight: 40.0,
            date: None,
        };

        let items = repo.add(row.clone()).await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items.last(), Some(&row));

        let reloaded = Repository::<Exercise>::load(store).await;
        assert_eq!(reloaded.items(), repo.items());
    }

    #[tokio::test]
    async fn delete_out_of_range_is_not_found() {
        let mut repo = Repository::<ProgressEntry>::load(store()).await;
        let err = repo.delete(2).await.unwrap_err();
        assert!(matches!(err, MutationError::NotFound { index: 2, len: 2 }));
        assert_eq!(repo.items().len(), 2);
    }

    #[test]
    fn validation_rules_per_domain() {
        let blank_name = Exercise {
            name: "   ".to_string(),
            sets: 1,
            reps: 1,
            weight: 0.0,
            date: None,
        };
        assert!(!blank_name.is_valid());

        let zero_sets = Exercise {
            name: "Curl".to_string(),
            sets: 0,
            reps: 10,
            weight: 10.0,
            date: None,
        };
        assert!(!zero_sets.is_valid());

        let bodyweight = Exercise {
            name: "Pull-up".to_string(),
            sets: 3,
            reps: 8,
            weight: 0.0,
            date: None,
        };
        assert!(bodyweight.is_valid());

        let free_meal = Meal {
            name: "Water".to_string(),
            ..Meal::default()
        };
        assert!(free_meal.is_valid());

        let negative_fat = Meal {
            name: "Odd".to_string(),
            fat: -1,
            ..Meal::default()
        };
        assert_eq!(
            negative_fat.validate(),
            Err(ValidationError {
                message: Meal::REJECTED
            })
        );

        let weightless = ProgressEntry {
            date: "2024-03-01".to_string(),
            weight: 0.0,
            body_fat: 10.0,
            notes: String::new(),
        };
        assert!(!weightless.is_valid());

        let undated = ProgressEntry {
            date: String::new(),
            weight: 70.0,
            body_fat: 10.0,
            notes: String::new(),
        };
        assert!(!undated.is_valid());
    }
}

//! Per-domain add/delete state machine.
//!
//! A view is `Idle` while it only shows its list and `Editing` while a
//! draft is pending. Submitting always returns to `Idle`; the draft is
//! cleared only when it was accepted.

use crate::models::Notice;
use crate::repository::{MutationError, Record, Repository};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Editing,
}

pub struct DomainView<R: Record + Default> {
    repo: Repository<R>,
    draft: R,
    phase: Phase,
}

impl<R: Record + Default> DomainView<R> {
    pub async fn activate(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            repo: Repository::load(store).await,
            draft: R::default(),
            phase: Phase::Idle,
        }
    }

    pub fn items(&self) -> &[R] {
        self.repo.items()
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn edit(&mut self, draft: R) {
        self.draft = draft;
        self.phase = Phase::Editing;
    }

    /// Validates and appends the pending draft.
    pub async fn submit(&mut self) -> Result<Notice, MutationError> {
        self.phase = Phase::Idle;
        match self.repo.add(self.draft.clone()).await {
            Ok(items) => {
                info!(key = R::KEY, count = items.len(), "record added");
                self.draft = R::default();
                Ok(Notice::success(R::ADDED))
            }
            Err(err) => {
                warn!(key = R::KEY, "add failed: {err}");
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, index: usize) -> Result<R, MutationError> {
        let removed = self.repo.delete(index).await?;
        info!(key = R::KEY, index, "record deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;
    use crate::storage::MemoryStore;

    fn squat(sets: i64) -> Exercise {
        Exercise {
            name: "Front Squat".to_string(),
            sets,
            reps: 5,
            weight: 70.0,
            date: None,
        }
    }

    #[tokio::test]
    async fn accepted_draft_is_cleared() {
        let mut view = DomainView::<Exercise>::activate(Arc::new(MemoryStore::new())).await;
        assert_eq!(view.phase(), Phase::Idle);

        view.edit(squat(3));
        assert_eq!(view.phase(), Phase::Editing);

        let notice = view.submit().await.unwrap();
        assert_eq!(notice, Notice::success("Exercise added successfully!"));
        assert_eq!(view.phase(), Phase::Idle);
        assert_eq!(view.draft(), &Exercise::default());
        assert_eq!(view.items().len(), 3);
    }

    #[tokio::test]
    async fn rejected_draft_is_kept() {
        let mut view = DomainView::<Exercise>::activate(Arc::new(MemoryStore::new())).await;
        view.edit(squat(0));

        let err = view.submit().await.unwrap_err();
        assert!(matches!(err, MutationError::Rejected(_)));
        assert_eq!(view.phase(), Phase::Idle);
        assert_eq!(view.draft(), &squat(0));
        assert_eq!(view.items().len(), 2);
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let mut view = DomainView::<Exercise>::activate(Arc::new(MemoryStore::new())).await;
        let removed = view.delete(1).await.unwrap();
        assert_eq!(removed.name, "Squats");
        assert_eq!(view.items().len(), 1);
    }
}

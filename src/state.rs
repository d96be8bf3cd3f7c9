use crate::config::Goals;
use crate::models::{Exercise, Meal, ProgressEntry};
use crate::storage::KeyValueStore;
use crate::view::DomainView;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One view per domain, each behind its own lock so mutations on a domain
/// run one at a time.
#[derive(Clone)]
pub struct AppState {
    pub goals: Goals,
    pub workouts: Arc<Mutex<DomainView<Exercise>>>,
    pub meals: Arc<Mutex<DomainView<Meal>>>,
    pub progress: Arc<Mutex<DomainView<ProgressEntry>>>,
}

impl AppState {
    pub async fn new(store: Arc<dyn KeyValueStore>, goals: Goals) -> Self {
        Self {
            goals,
            workouts: Arc::new(Mutex::new(DomainView::activate(store.clone()).await)),
            meals: Arc::new(Mutex::new(DomainView::activate(store.clone()).await)),
            progress: Arc::new(Mutex::new(DomainView::activate(store).await)),
        }
    }
}

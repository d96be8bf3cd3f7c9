pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;
pub mod view;

pub use app::router;
pub use config::{Config, Goals};
pub use repository::{Record, Repository};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use view::DomainView;

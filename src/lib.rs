// TaskList - In-memory task list store with search and single-slot editing

pub mod filter;
pub mod models;
pub mod store;

// Re-export main types for convenience
pub use filter::SearchFilter;
pub use models::{Task, TaskId, now_ms};
pub use store::{Snapshot, TaskListStore};

pub mod error;
pub mod files;
pub mod metadata;
pub mod project_store;
pub mod task_store;
pub mod theme_store;

pub use error::{Result, StoreError};
pub use files::{get_data_dir, init_local_dir, log_dir, meta_file};
pub use metadata::{load_metadata, save_metadata, AppMetadata};
pub use project_store::ProjectStore;
pub use task_store::TaskStore;
pub use theme_store::ThemeStore;

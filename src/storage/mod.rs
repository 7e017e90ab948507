//! Storage module: key-value backends, the typed store, and configuration.

pub mod backend;
pub mod config;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use config::{get_config_path, get_data_dir, load_config, save_config, AppConfig, ConfigError};
pub use store::{keys, StorageError, Store};

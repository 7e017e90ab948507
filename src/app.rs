//! Application facade tying the store, session, and stats together.
//!
//! `FitnessApp` exposes the operations the presentation layer performs:
//! auth, workout logging, and derived statistics. Views hold no logic of
//! their own; they call into this facade.

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::auth::registry::{self, AuthError};
use crate::auth::types::User;
use crate::stats::{self, DailyTotal, StatsSummary};
use crate::storage::{
    load_config, AppConfig, ConfigError, FileBackend, StorageBackend, StorageError, Store,
};
use crate::workouts::log;
use crate::workouts::types::{Workout, WorkoutDraft, WorkoutType};
use crate::workouts::WorkoutError;

/// Startup errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Application state: the typed store plus the in-memory session.
pub struct FitnessApp<B: StorageBackend> {
    store: Store<B>,
    config: AppConfig,
    session: Option<User>,
}

impl FitnessApp<FileBackend> {
    /// Open the application with file storage at the platform data
    /// directory, rehydrating any saved session.
    pub fn open() -> Result<Self, AppError> {
        let config = load_config()?;
        let backend = FileBackend::open(&config.data_dir)?;
        Self::with_backend_and_config(backend, config)
    }
}

impl<B: StorageBackend> FitnessApp<B> {
    /// Open the application over an arbitrary backend with default
    /// configuration. Tests use this with `MemoryBackend`.
    pub fn with_backend(backend: B) -> Result<Self, AppError> {
        Self::with_backend_and_config(backend, AppConfig::default())
    }

    fn with_backend_and_config(backend: B, config: AppConfig) -> Result<Self, AppError> {
        let store = Store::new(backend);

        // Rehydrate the session. A user removed from the registry by
        // external edits is not re-validated here.
        let session = store.current_user()?;
        if let Some(user) = &session {
            tracing::info!(email = %user.email, "Restored session");
        }

        Ok(Self {
            store,
            config,
            session,
        })
    }

    /// Application configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    // ========== Auth ==========

    /// Log in with email and password; the user becomes the persisted
    /// session user.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = registry::login(&self.store, email, password)?;
        self.store.set_current_user(&user)?;
        self.session = Some(user.clone());
        Ok(user)
    }

    /// Register a new user and log them in immediately.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let user = registry::signup(&mut self.store, name, email, password)?;
        self.store.set_current_user(&user)?;
        self.session = Some(user.clone());
        Ok(user)
    }

    /// Clear the session.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.clear_current_user()?;
        self.session = None;
        Ok(())
    }

    // ========== Workout log ==========

    /// All logged workouts, in insertion order.
    pub fn workouts(&self) -> Result<Vec<Workout>, WorkoutError> {
        Ok(self.store.workouts()?)
    }

    /// Validate and append a workout.
    pub fn add_workout(&mut self, draft: WorkoutDraft) -> Result<Workout, WorkoutError> {
        log::add_workout(&mut self.store, draft)
    }

    /// Delete a workout by id. Returns `false` if no record matched.
    pub fn delete_workout(&mut self, id: &str) -> Result<bool, WorkoutError> {
        log::delete_workout(&mut self.store, id)
    }

    // ========== Stats ==========

    /// Aggregate statistics as of the local calendar date.
    pub fn summary(&self) -> Result<StatsSummary, WorkoutError> {
        self.summary_at(Local::now().date_naive())
    }

    /// Aggregate statistics as of an explicit date.
    pub fn summary_at(&self, today: NaiveDate) -> Result<StatsSummary, WorkoutError> {
        Ok(stats::summary(&self.store.workouts()?, today))
    }

    /// Per-date calorie and minute totals, in first-seen order.
    pub fn daily_totals(&self) -> Result<Vec<DailyTotal>, WorkoutError> {
        Ok(stats::daily_totals(&self.store.workouts()?))
    }

    /// Workout count per type, in first-seen order.
    pub fn type_distribution(&self) -> Result<Vec<(WorkoutType, usize)>, WorkoutError> {
        Ok(stats::type_distribution(&self.store.workouts()?))
    }
}

//! # LifeRPG Core Library
//!
//! This library provides the core business logic for LifeRPG, a gamified
//! habit tracker: completing real-life habits ("quests") maps to RPG-style
//! character progression. All operations are available via a standalone CLI
//! binary; any GUI would be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Progression Engine**: synchronous state-transition methods on a
//!   [`Profile`] save record -- complete a quest, end the day, manage the
//!   quest list. The engine performs no I/O; it returns outcome values
//!   ([`Completion`], [`DayReport`]) for the caller to persist and present.
//! - **Storage**: SQLite-based profile storage and TOML-based configuration
//! - **History**: per-day XP totals, the data feed behind progress charts
//!
//! ## Key Components
//!
//! - [`Profile`]: the save record (level, experience, hit points, attributes,
//!   quests) and the operations that mutate it
//! - [`Database`]: profile and XP-history persistence
//! - [`Config`]: application configuration management

pub mod attribute;
pub mod engine;
pub mod error;
pub mod profile;
pub mod quest;
pub mod storage;

pub use attribute::{Attribute, Attributes};
pub use engine::{Completion, DayOutcome, DayReport};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use profile::Profile;
pub use quest::Quest;
pub use storage::{Config, Database, XpEntry};

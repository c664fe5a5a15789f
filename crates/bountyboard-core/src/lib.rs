//! bountyboard-core: Core library for the bug bounty program catalog
//!
//! This crate owns the in-memory data model and all of its
//! state-transition logic: the program store, asset staging, the date
//! selection machine, and the creation workflow. Presentation lives in
//! the `bountyboard` CLI crate and only calls in through these types.

/// Core error types for bountyboard operations
pub mod error;

/// Configuration handling
pub mod config;

/// Core data types (Program, Asset, Subscription, etc.)
pub mod types;

/// Validation rules for the creation workflow
pub mod validate;

/// The authoritative program collection
pub mod store;

/// Asset staging for the creation workflow
pub mod staging;

/// Date selection interaction state machine
pub mod datepick;

/// The program-creation workflow
pub mod workflow;

/// Demo data
pub mod seed;

// Re-exports for convenience
pub use config::{BoardConfig, Config};
pub use datepick::DateSelection;
pub use error::BountyError;
pub use staging::{StageRejection, StagingSession};
pub use store::ProgramStore;
pub use types::{
    Asset, AssetDraft, AssetKind, BountyEligibility, Program, ProgramInput, ProgramPatch,
    Subscription,
};
pub use validate::{is_duplicate_identifier, is_non_empty};
pub use workflow::{ProgramForm, SubmitRejection};

//! CLI command implementations

use std::path::Path;

use bountyboard_core::{seed::seed_programs, BountyError, Config, ProgramStore};

pub mod board;
pub mod create;
pub mod list;

pub use board::run_board;
pub use create::run_create;
pub use list::run_list;

/// Load configuration from the given path or the default location
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, BountyError> {
    match path {
        Some(p) => Config::load_or_default(Some(p)),
        None => Config::load_or_default(Config::default_path().as_deref()),
    }
}

/// Open a store for this session, seeded per configuration
pub(crate) fn open_store(config: &Config) -> ProgramStore {
    if config.board.seed_demo_data {
        ProgramStore::with_programs(seed_programs())
    } else {
        ProgramStore::new()
    }
}

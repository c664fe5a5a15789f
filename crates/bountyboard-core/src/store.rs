//! The authoritative in-memory program collection
//!
//! `ProgramStore` is the sole mutator of program state. It performs no
//! validation of its own; the creation workflow validates before
//! calling in, so every input here is assumed well-formed.

use chrono::Utc;
use uuid::Uuid;

use crate::types::{Program, ProgramInput, ProgramPatch};

/// Owned, encapsulated collection of programs
///
/// Programs are held most-recently-created first; `create` prepends.
/// All data lives in memory for the process lifetime.
#[derive(Debug, Default)]
pub struct ProgramStore {
    programs: Vec<Program>,
}

impl ProgramStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with programs, given newest-first
    pub fn with_programs(programs: Vec<Program>) -> Self {
        Self { programs }
    }

    /// Current collection, most-recently-created first
    pub fn list(&self) -> &[Program] {
        &self.programs
    }

    /// Look up a program by id
    pub fn get(&self, id: Uuid) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Number of programs held
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the store holds no programs
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Create a program from the given input and prepend it
    ///
    /// Assigns a fresh id to the program and to each draft asset, and
    /// stamps `created_at` with the current time. Always succeeds.
    pub fn create(&mut self, input: ProgramInput) -> &Program {
        let program = Program {
            id: Uuid::new_v4(),
            name: input.name,
            start_date: input.start_date,
            website: input.website,
            twitter_handle: input.twitter_handle,
            assets: input.assets.into_iter().map(|d| d.into_asset()).collect(),
            created_at: Utc::now(),
        };
        self.programs.insert(0, program);
        &self.programs[0]
    }

    /// Remove the program with the given id; no-op if absent
    pub fn delete(&mut self, id: Uuid) {
        self.programs.retain(|p| p.id != id);
    }

    /// Merge the patch into the program with the given id; no-op if absent
    ///
    /// `None` fields of the patch leave the program untouched.
    pub fn update(&mut self, id: Uuid, patch: ProgramPatch) {
        let Some(program) = self.programs.iter_mut().find(|p| p.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            program.name = name;
        }
        if let Some(start_date) = patch.start_date {
            program.start_date = start_date;
        }
        if let Some(website) = patch.website {
            program.website = Some(website);
        }
        if let Some(handle) = patch.twitter_handle {
            program.twitter_handle = Some(handle);
        }
    }
}

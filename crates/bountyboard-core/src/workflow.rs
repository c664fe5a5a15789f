//! The program-creation workflow
//!
//! `ProgramForm` composes the scalar form fields, the asset staging
//! session, and the date selection machine into one submit action. A
//! program is created in full or not at all; on success the form
//! resets itself for the next creation attempt.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::datepick::DateSelection;
use crate::staging::StagingSession;
use crate::store::ProgramStore;
use crate::types::ProgramInput;
use crate::validate::is_non_empty;

/// Why a submit was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Program name is empty; the field is flagged and the workflow
    /// stays open
    #[error("program name is required")]
    MissingName,
}

/// Multi-step form state for creating one program
#[derive(Debug)]
pub struct ProgramForm {
    name: String,
    website: String,
    twitter_handle: String,
    name_invalid: bool,
    default_start: NaiveDate,
    /// Candidate assets for this creation attempt
    pub staging: StagingSession,
    /// Start-date popover state
    pub date: DateSelection,
}

impl ProgramForm {
    /// Open a fresh form with the configured default start date
    pub fn new(default_start: NaiveDate) -> Self {
        Self {
            name: String::new(),
            website: String::new(),
            twitter_handle: String::new(),
            name_invalid: false,
            default_start,
            staging: StagingSession::new(),
            date: DateSelection::new(default_start),
        }
    }

    /// Program name as currently typed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Website field as currently typed
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Twitter / X handle as currently typed
    pub fn twitter_handle(&self) -> &str {
        &self.twitter_handle
    }

    /// Whether the name field was flagged by a refused submit
    pub fn name_invalid(&self) -> bool {
        self.name_invalid
    }

    /// Set the program name; clears the invalid flag
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.name_invalid = false;
    }

    /// Set the website field
    pub fn set_website(&mut self, website: impl Into<String>) {
        self.website = website.into();
    }

    /// Set the Twitter / X handle field
    pub fn set_twitter_handle(&mut self, handle: impl Into<String>) {
        self.twitter_handle = handle.into();
    }

    /// Submit the form, creating a program in the store
    ///
    /// Rejects when the name is empty: the field is flagged, the store
    /// is untouched, and the form keeps all its state for correction.
    /// On success the staged assets and committed date are handed to
    /// the store, and the form resets to its defaults.
    pub fn submit(&mut self, store: &mut ProgramStore) -> Result<Uuid, SubmitRejection> {
        if !is_non_empty(&self.name) {
            self.name_invalid = true;
            return Err(SubmitRejection::MissingName);
        }

        let input = ProgramInput {
            name: std::mem::take(&mut self.name),
            start_date: self.date.committed(),
            website: optional_field(&self.website),
            twitter_handle: optional_field(&self.twitter_handle),
            assets: self.staging.take_staged(),
        };
        let id = store.create(input).id;

        self.reset();
        Ok(id)
    }

    /// Discard the creation attempt without touching the store
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.name.clear();
        self.website.clear();
        self.twitter_handle.clear();
        self.name_invalid = false;
        self.staging.reset();
        self.date.reset(self.default_start);
    }
}

/// Map a blank form field to `None`
fn optional_field(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

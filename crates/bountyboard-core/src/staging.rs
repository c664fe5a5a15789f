//! Asset staging for the creation workflow
//!
//! A `StagingSession` holds the candidate assets for one creation
//! attempt plus the draft currently being filled in. It exists only
//! while the creation workflow is open and is cleared on cancel or
//! after a successful submit.

use thiserror::Error;

use crate::types::{AssetDraft, AssetKind, BountyEligibility};
use crate::validate::{is_duplicate_identifier, is_non_empty};

/// Why a draft was refused by [`StagingSession::add_draft`]
///
/// These are validation outcomes, not faults. `EmptyIdentifier` is a
/// silent refusal; `DuplicateIdentifier` carries the message shown to
/// the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageRejection {
    /// Identifier is blank after trimming; refused without notification
    #[error("asset identifier is empty")]
    EmptyIdentifier,

    /// Identifier collides with an already-staged asset
    #[error("asset identifier already exists: {identifier}")]
    DuplicateIdentifier { identifier: String },
}

/// Transient per-creation-attempt collection of candidate assets
#[derive(Debug, Default)]
pub struct StagingSession {
    staged: Vec<AssetDraft>,
    draft: AssetDraft,
}

impl StagingSession {
    /// Create an empty session with a default draft
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft currently being filled in
    pub fn draft(&self) -> &AssetDraft {
        &self.draft
    }

    /// Staged assets in insertion order
    pub fn staged(&self) -> &[AssetDraft] {
        &self.staged
    }

    /// Set the draft's kind; no validation
    pub fn set_kind(&mut self, kind: AssetKind) {
        self.draft.kind = kind;
    }

    /// Set the draft's identifier; no validation
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.draft.identifier = identifier.into();
    }

    /// Set the draft's description; no validation
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Set the draft's bounty eligibility; no validation
    pub fn set_eligibility(&mut self, eligibility: BountyEligibility) {
        self.draft.bounty_eligibility = eligibility;
    }

    /// Append the current draft to the staged list
    ///
    /// Refuses a blank identifier silently and a duplicate identifier
    /// with a user-visible message; the draft is retained either way so
    /// the user can correct it. On success the draft resets to its
    /// default and the staged list grows by one.
    pub fn add_draft(&mut self) -> Result<(), StageRejection> {
        if !is_non_empty(&self.draft.identifier) {
            return Err(StageRejection::EmptyIdentifier);
        }

        let staged_ids = self.staged.iter().map(|a| a.identifier.as_str());
        if is_duplicate_identifier(&self.draft.identifier, staged_ids) {
            return Err(StageRejection::DuplicateIdentifier {
                identifier: self.draft.identifier.clone(),
            });
        }

        self.staged.push(std::mem::take(&mut self.draft));
        Ok(())
    }

    /// Remove the staged asset at the given position; no-op if out of range
    ///
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, index: usize) {
        if index < self.staged.len() {
            self.staged.remove(index);
        }
    }

    /// Clear the staged list and reset the draft to its default
    pub fn reset(&mut self) {
        self.staged.clear();
        self.draft = AssetDraft::default();
    }

    /// Drain the staged assets for promotion into a program
    pub fn take_staged(&mut self) -> Vec<AssetDraft> {
        std::mem::take(&mut self.staged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(session: &mut StagingSession, identifier: &str) -> Result<(), StageRejection> {
        session.set_identifier(identifier);
        session.add_draft()
    }

    #[test]
    fn test_add_draft_resets_draft_to_default() {
        let mut session = StagingSession::new();
        session.set_kind(AssetKind::Mobile);
        session.set_identifier("acme-app");
        session.set_description("store build");
        session.set_eligibility(BountyEligibility::Ineligible);

        session.add_draft().unwrap();

        assert_eq!(session.staged().len(), 1);
        assert_eq!(session.staged()[0].kind, AssetKind::Mobile);
        assert_eq!(session.staged()[0].identifier, "acme-app");

        let draft = session.draft();
        assert_eq!(draft.kind, AssetKind::Web);
        assert!(draft.identifier.is_empty());
        assert!(draft.description.is_empty());
        assert_eq!(draft.bounty_eligibility, BountyEligibility::Eligible);
    }

    #[test]
    fn test_empty_identifier_refused_silently() {
        let mut session = StagingSession::new();

        assert_eq!(stage(&mut session, ""), Err(StageRejection::EmptyIdentifier));
        assert_eq!(
            stage(&mut session, "   "),
            Err(StageRejection::EmptyIdentifier)
        );
        assert!(session.staged().is_empty());
    }

    #[test]
    fn test_duplicate_identifier_refused_case_insensitively() {
        let mut session = StagingSession::new();
        stage(&mut session, "Trustline.sa").unwrap();

        let rejection = stage(&mut session, "trustline.SA").unwrap_err();
        assert_eq!(
            rejection,
            StageRejection::DuplicateIdentifier {
                identifier: "trustline.SA".to_string()
            }
        );
        assert!(rejection.to_string().contains("already exists"));
        assert_eq!(session.staged().len(), 1);

        // Draft retained for correction
        assert_eq!(session.draft().identifier, "trustline.SA");
    }

    #[test]
    fn test_same_identifier_allowed_in_fresh_session() {
        let mut first = StagingSession::new();
        stage(&mut first, "trustline.sa").unwrap();

        let mut second = StagingSession::new();
        assert!(stage(&mut second, "trustline.sa").is_ok());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut session = StagingSession::new();
        stage(&mut session, "a").unwrap();
        stage(&mut session, "b").unwrap();
        stage(&mut session, "c").unwrap();

        session.remove(1);

        let ids: Vec<_> = session
            .staged()
            .iter()
            .map(|a| a.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut session = StagingSession::new();
        stage(&mut session, "only").unwrap();

        session.remove(5);
        assert_eq!(session.staged().len(), 1);
    }

    #[test]
    fn test_reset_clears_staged_and_draft() {
        let mut session = StagingSession::new();
        stage(&mut session, "a").unwrap();
        session.set_identifier("half-typed");

        session.reset();

        assert!(session.staged().is_empty());
        assert!(session.draft().identifier.is_empty());
    }

    #[test]
    fn test_take_staged_drains() {
        let mut session = StagingSession::new();
        stage(&mut session, "a").unwrap();
        stage(&mut session, "b").unwrap();

        let drained = session.take_staged();
        assert_eq!(drained.len(), 2);
        assert!(session.staged().is_empty());
    }
}

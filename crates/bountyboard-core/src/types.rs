//! Core data types for bountyboard

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bug bounty program with its testable assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Unique stable identifier, assigned at creation
    pub id: Uuid,
    /// Program name (non-empty)
    pub name: String,
    /// Start date of the engagement (no time-of-day semantics)
    pub start_date: NaiveDate,
    /// Optional website, format-unvalidated
    pub website: Option<String>,
    /// Optional Twitter / X handle, format-unvalidated
    pub twitter_handle: Option<String>,
    /// Assets in insertion order (insertion order = display order)
    pub assets: Vec<Asset>,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
}

/// A single testable target within a program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier, assigned when promoted out of staging
    pub id: Uuid,
    /// Asset kind (web, mobile, or the legacy android variant)
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// The asset's name or address (non-empty)
    pub identifier: String,
    /// Free-text description
    pub description: String,
    /// Whether findings against this asset pay out
    pub bounty_eligibility: BountyEligibility,
}

/// Kind of asset
///
/// `Web` and `Mobile` are the form-selectable kinds. `Android` appears
/// in legacy seed data and is rendered with its own icon, but is never
/// offered by the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKind {
    /// Web target
    #[default]
    Web,
    /// Mobile app target
    Mobile,
    /// Legacy display-only variant
    Android,
}

impl AssetKind {
    /// Kinds the creation form offers
    pub fn selectable() -> [AssetKind; 2] {
        [AssetKind::Web, AssetKind::Mobile]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Web => "Web",
            AssetKind::Mobile => "Mobile App",
            AssetKind::Android => "Android",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Web => write!(f, "WEB"),
            AssetKind::Mobile => write!(f, "MOBILE"),
            AssetKind::Android => write!(f, "ANDROID"),
        }
    }
}

/// Bounty eligibility flag for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BountyEligibility {
    /// Findings pay out
    #[default]
    Eligible,
    /// Findings do not pay out
    Ineligible,
}

impl BountyEligibility {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BountyEligibility::Eligible => "Eligible",
            BountyEligibility::Ineligible => "Ineligible",
        }
    }
}

impl std::fmt::Display for BountyEligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BountyEligibility::Eligible => write!(f, "ELIGIBLE"),
            BountyEligibility::Ineligible => write!(f, "INELIGIBLE"),
        }
    }
}

/// An asset being assembled in the creation form, before it has an id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDraft {
    /// Asset kind
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// The asset's name or address
    pub identifier: String,
    /// Free-text description
    pub description: String,
    /// Bounty eligibility flag
    pub bounty_eligibility: BountyEligibility,
}

impl Default for AssetDraft {
    fn default() -> Self {
        Self {
            kind: AssetKind::Web,
            identifier: String::new(),
            description: String::new(),
            bounty_eligibility: BountyEligibility::Eligible,
        }
    }
}

impl AssetDraft {
    /// Promote the draft to an asset with a freshly assigned id
    pub fn into_asset(self) -> Asset {
        Asset {
            id: Uuid::new_v4(),
            kind: self.kind,
            identifier: self.identifier,
            description: self.description,
            bounty_eligibility: self.bounty_eligibility,
        }
    }
}

/// Payload for creating a program
#[derive(Debug, Clone, Default)]
pub struct ProgramInput {
    /// Program name
    pub name: String,
    /// Start date
    pub start_date: NaiveDate,
    /// Optional website
    pub website: Option<String>,
    /// Optional Twitter / X handle
    pub twitter_handle: Option<String>,
    /// Asset drafts to promote (ids assigned at creation)
    pub assets: Vec<AssetDraft>,
}

/// Partial update for a program; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProgramPatch {
    /// New name
    pub name: Option<String>,
    /// New start date
    pub start_date: Option<NaiveDate>,
    /// New website
    pub website: Option<String>,
    /// New Twitter / X handle
    pub twitter_handle: Option<String>,
}

/// Subscription usage summary shown above the programs table
///
/// Supplied externally (configuration / seed data); the core never
/// derives these numbers from program state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription display name
    pub name: String,
    /// End date display string
    pub end_date: String,
    /// Remaining balance, whole currency units
    pub available: u64,
    /// Consumed balance, whole currency units
    pub consumed: u64,
    /// Total balance, whole currency units
    pub total: u64,
}

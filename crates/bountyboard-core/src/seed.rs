//! Demo data for an empty board
//!
//! Program data lives only for the process lifetime, so a fresh session
//! starts from these seeds unless configuration disables them.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::types::{Asset, AssetKind, BountyEligibility, Program, Subscription};

/// The demo subscription summary
pub fn demo_subscription() -> Subscription {
    Subscription {
        name: "Subscription 01".to_string(),
        end_date: "Aug 23, 2023".to_string(),
        available: 8000,
        consumed: 400,
        total: 1200,
    }
}

/// Demo programs, newest-first as the store expects
pub fn seed_programs() -> Vec<Program> {
    let descriptions = [
        ("Complete Form", BountyEligibility::Eligible),
        ("Under Review", BountyEligibility::Ineligible),
        ("5 open Findings", BountyEligibility::Eligible),
        ("74 Resolved Reports", BountyEligibility::Ineligible),
        ("71 Resolved Reports", BountyEligibility::Eligible),
        ("71 Resolved Reports", BountyEligibility::Ineligible),
    ];

    let mut programs: Vec<Program> = descriptions
        .into_iter()
        .map(|(description, eligibility)| Program {
            id: Uuid::new_v4(),
            name: "Web AI Pentest - B2 team".to_string(),
            start_date: seed_start_date(),
            website: Some("https://trustline.sa".to_string()),
            twitter_handle: None,
            assets: vec![Asset {
                id: Uuid::new_v4(),
                kind: AssetKind::Web,
                identifier: "Trustline.sa".to_string(),
                description: description.to_string(),
                bounty_eligibility: eligibility,
            }],
            created_at: seed_created_at(),
        })
        .collect();

    // Legacy intake with the display-only ANDROID variant
    programs.push(Program {
        id: Uuid::new_v4(),
        name: "Mobile AI Pentest - QA team".to_string(),
        start_date: seed_start_date(),
        website: Some("https://trustline.sa".to_string()),
        twitter_handle: None,
        assets: vec![
            Asset {
                id: Uuid::new_v4(),
                kind: AssetKind::Android,
                identifier: "Trustline.sa".to_string(),
                description: "Review Quotation Letter".to_string(),
                bounty_eligibility: BountyEligibility::Eligible,
            },
            Asset {
                id: Uuid::new_v4(),
                kind: AssetKind::Web,
                identifier: "Google.sa".to_string(),
                description: "Form Incomplete".to_string(),
                bounty_eligibility: BountyEligibility::Ineligible,
            },
        ],
        created_at: seed_created_at(),
    });

    programs
}

fn seed_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 2).expect("valid date")
}

fn seed_created_at() -> DateTime<Utc> {
    "2023-11-02T00:00:00Z"
        .parse()
        .expect("valid RFC 3339 timestamp")
}

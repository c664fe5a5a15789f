//! Output formatting: JSON envelope, tables, and display helpers

use bountyboard_core::{AssetKind, BountyEligibility, Program, Subscription};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::colors::COLORS;

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Validation issues, warnings, etc.
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    /// Create an error response
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }
}

/// Issue object carried in the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Error/warning code (e.g., "B001")
    pub code: String,
    /// Severity level
    pub severity: String,
    /// Human-readable message
    pub message: String,
}

/// Data payload for the list command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListData {
    /// Subscription usage summary
    pub subscription: Subscription,
    /// One row per (program, asset) pair
    pub rows: Vec<ProgramRow>,
}

/// A flattened table row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramRow {
    /// Owning program id
    pub program_id: Uuid,
    /// Program name
    pub program: String,
    /// Program start date
    pub start_date: NaiveDate,
    /// Asset id
    pub asset_id: Uuid,
    /// Asset kind
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Asset identifier
    pub asset_identifier: String,
    /// Asset description
    pub description: String,
    /// Bounty eligibility
    pub bounty_eligibility: BountyEligibility,
}

/// Data payload for the create command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateData {
    /// Id of the created program
    pub program_id: Uuid,
    /// Name of the created program
    pub name: String,
    /// Number of assets promoted from staging
    pub asset_count: usize,
}

/// Flatten programs into one row per (program, asset) pair
pub fn flatten_rows(programs: &[Program]) -> Vec<ProgramRow> {
    programs
        .iter()
        .flat_map(|program| {
            program.assets.iter().map(|asset| ProgramRow {
                program_id: program.id,
                program: program.name.clone(),
                start_date: program.start_date,
                asset_id: asset.id,
                kind: asset.kind,
                asset_identifier: asset.identifier.clone(),
                description: asset.description.clone(),
                bounty_eligibility: asset.bounty_eligibility,
            })
        })
        .collect()
}

/// Format a date for display as DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a whole currency amount with thousands separators, e.g. "$8,000"
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}

/// Render the subscription summary line
pub fn render_subscription(sub: &Subscription) -> String {
    format!(
        "{}  Ends {}  |  Available {}  |  Consumed {}  |  Total Balance {}",
        sub.name.bold(),
        sub.end_date,
        format_currency(sub.available).style(COLORS.success),
        format_currency(sub.consumed),
        format_currency(sub.total).bold(),
    )
}

/// Render the flattened programs table
pub fn render_table(rows: &[ProgramRow]) -> String {
    let program_width = column_width(rows.iter().map(|r| r.program.len()), "PROGRAM".len());
    let identifier_width = column_width(
        rows.iter().map(|r| r.asset_identifier.len()),
        "ASSET IDENTIFIER".len(),
    );
    let description_width = column_width(
        rows.iter().map(|r| r.description.len()),
        "DESCRIPTION".len(),
    );
    // DD/MM/YYYY
    let date_width = "START DATE".len();

    let mut out = String::new();
    out.push_str(&format!(
        "{:<program_width$}  {:<date_width$}  {:<identifier_width$}  {:<description_width$}  {}\n",
        "PROGRAM", "START DATE", "ASSET IDENTIFIER", "DESCRIPTION", "BOUNTY"
    ));

    for row in rows {
        let program = format!("{:<program_width$}", row.program);
        let identifier = format!("{:<identifier_width$}", row.asset_identifier);
        let badge = bounty_badge(row.bounty_eligibility);
        out.push_str(&format!(
            "{}  {:<date_width$}  {}  {:<description_width$}  {}\n",
            program.style(COLORS.accent),
            format_date(row.start_date),
            identifier.style(COLORS.accent),
            row.description,
            badge,
        ));
    }

    out
}

/// Colored bounty eligibility badge
pub fn bounty_badge(eligibility: BountyEligibility) -> String {
    match eligibility {
        BountyEligibility::Eligible => format!("{}", "Eligible".style(COLORS.success)),
        BountyEligibility::Ineligible => format!("{}", "Ineligible".style(COLORS.fail)),
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, header: usize) -> usize {
    lengths.max().unwrap_or(header).max(header)
}

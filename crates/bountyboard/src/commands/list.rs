//! Implementation of the `bountyboard list` command

use std::path::PathBuf;

use bountyboard_core::BountyEligibility;

use crate::commands::{load_config, open_store};
use crate::output::{
    flatten_rows, render_subscription, render_table, JsonIssue, JsonResponse, ListData,
};

/// Run the list command
pub fn run_list(
    eligibility_filter: Option<String>,
    json_output: bool,
    quiet: bool,
    verbose: bool,
    config_path: Option<PathBuf>,
) -> Result<i32, String> {
    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            emit_error(json_output, e.code(), &e.to_string());
            return Ok(e.exit_code());
        }
    };

    let filter = match eligibility_filter.as_deref() {
        None => None,
        Some(raw) => match parse_eligibility(raw) {
            Some(f) => Some(f),
            None => {
                let message = format!(
                    "invalid eligibility filter: {} (expected eligible or ineligible)",
                    raw
                );
                emit_error(json_output, "B001", &message);
                return Ok(1);
            }
        },
    };

    let store = open_store(&config);
    let mut rows = flatten_rows(store.list());
    if let Some(filter) = filter {
        rows.retain(|r| r.bounty_eligibility == filter);
    }

    if json_output {
        let response = JsonResponse::ok(
            "list",
            ListData {
                subscription: config.subscription.clone(),
                rows,
            },
        );
        println!("{}", serde_json::to_string_pretty(&response).unwrap());
    } else if !quiet {
        println!("{}", render_subscription(&config.subscription));
        println!();
        if rows.is_empty() {
            println!("No programs found");
        } else {
            print!("{}", render_table(&rows));
        }
        if verbose {
            println!();
            println!("{} programs, {} rows", store.len(), rows.len());
        }
    }

    Ok(0)
}

/// Parse an eligibility filter value, case-insensitively
fn parse_eligibility(raw: &str) -> Option<BountyEligibility> {
    if raw.eq_ignore_ascii_case("eligible") {
        Some(BountyEligibility::Eligible)
    } else if raw.eq_ignore_ascii_case("ineligible") {
        Some(BountyEligibility::Ineligible)
    } else {
        None
    }
}

fn emit_error(json_output: bool, code: &str, message: &str) {
    if json_output {
        let issues = vec![JsonIssue {
            code: code.to_string(),
            severity: "error".to_string(),
            message: message.to_string(),
        }];
        let response: JsonResponse<ListData> = JsonResponse::error(
            "list",
            ListData {
                subscription: bountyboard_core::seed::demo_subscription(),
                rows: vec![],
            },
            issues,
        );
        println!("{}", serde_json::to_string_pretty(&response).unwrap());
    } else {
        eprintln!("error: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eligibility() {
        assert_eq!(
            parse_eligibility("eligible"),
            Some(BountyEligibility::Eligible)
        );
        assert_eq!(
            parse_eligibility("INELIGIBLE"),
            Some(BountyEligibility::Ineligible)
        );
        assert_eq!(parse_eligibility("android"), None);
    }
}

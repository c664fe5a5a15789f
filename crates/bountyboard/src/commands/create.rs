//! Implementation of the `bountyboard create` command
//!
//! Interactive when attached to a terminal; scripted via flags
//! otherwise. Both paths drive the same core `ProgramForm`.

use std::io::IsTerminal;
use std::path::PathBuf;

use bountyboard_core::{AssetDraft, AssetKind, BountyEligibility, ProgramForm};
use chrono::NaiveDate;

use crate::commands::{load_config, open_store};
use crate::interaction::{form, setup_ctrl_c_handler};
use crate::output::{flatten_rows, render_table, CreateData, JsonIssue, JsonResponse};

/// Flag arguments for the non-interactive path
pub struct CreateArgs {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub assets: Vec<String>,
}

/// Run the create command
pub fn run_create(
    args: CreateArgs,
    json_output: bool,
    quiet: bool,
    config_path: Option<PathBuf>,
) -> Result<i32, String> {
    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            emit_error(json_output, e.code(), &e.to_string());
            return Ok(e.exit_code());
        }
    };
    let mut store = open_store(&config);

    if args.name.is_none() {
        if !std::io::stdin().is_terminal() {
            emit_error(
                json_output,
                "B001",
                "create requires --name when not attached to a terminal",
            );
            return Ok(1);
        }

        setup_ctrl_c_handler();
        return match form::run_create_form(&mut store, config.board.default_start_date) {
            Ok(Some(id)) => {
                if !quiet {
                    let program = store.get(id).expect("just created");
                    print!("{}", render_table(&flatten_rows(std::slice::from_ref(program))));
                }
                Ok(0)
            }
            Ok(None) => Ok(0),
            Err(e) => {
                eprintln!("error: {}", e);
                Ok(1)
            }
        };
    }

    // Non-interactive: stage everything, then submit once
    let mut form = ProgramForm::new(config.board.default_start_date);
    form.set_name(args.name.unwrap_or_default());

    if let Some(raw) = args.start_date {
        let date: NaiveDate = match raw.trim().parse() {
            Ok(date) => date,
            Err(_) => {
                emit_error(
                    json_output,
                    "B001",
                    &format!("invalid start date: {} (expected YYYY-MM-DD)", raw),
                );
                return Ok(1);
            }
        };
        form.date.open();
        form.date.pick(date);
        form.date.confirm();
    }
    if let Some(website) = args.website {
        form.set_website(website);
    }
    if let Some(twitter) = args.twitter {
        form.set_twitter_handle(twitter);
    }

    for spec in &args.assets {
        let draft = match parse_asset_spec(spec) {
            Ok(draft) => draft,
            Err(message) => {
                emit_error(json_output, "B001", &message);
                return Ok(1);
            }
        };
        form.staging.set_kind(draft.kind);
        form.staging.set_identifier(draft.identifier);
        form.staging.set_description(draft.description);
        form.staging.set_eligibility(draft.bounty_eligibility);
        if let Err(rejection) = form.staging.add_draft() {
            emit_error(json_output, "B001", &rejection.to_string());
            return Ok(1);
        }
    }

    match form.submit(&mut store) {
        Ok(id) => {
            let program = store.get(id).expect("just created");
            if json_output {
                let response = JsonResponse::ok(
                    "create",
                    CreateData {
                        program_id: id,
                        name: program.name.clone(),
                        asset_count: program.assets.len(),
                    },
                );
                println!("{}", serde_json::to_string_pretty(&response).unwrap());
            } else if !quiet {
                print!("{}", render_table(&flatten_rows(std::slice::from_ref(program))));
            }
            Ok(0)
        }
        Err(rejection) => {
            emit_error(json_output, "B001", &rejection.to_string());
            Ok(1)
        }
    }
}

/// Parse an asset spec: TYPE:IDENTIFIER[:DESCRIPTION[:ELIGIBILITY]]
pub fn parse_asset_spec(spec: &str) -> Result<AssetDraft, String> {
    let mut parts = spec.splitn(4, ':');

    let kind = match parts.next().unwrap_or_default().trim() {
        t if t.eq_ignore_ascii_case("web") => AssetKind::Web,
        t if t.eq_ignore_ascii_case("mobile") => AssetKind::Mobile,
        t => {
            return Err(format!(
                "unsupported asset type: {} (expected web or mobile)",
                t
            ))
        }
    };

    let identifier = parts.next().unwrap_or_default().trim();
    if identifier.is_empty() {
        return Err(format!("asset spec is missing an identifier: {}", spec));
    }

    let description = parts.next().unwrap_or_default().trim();

    let eligibility = match parts.next().unwrap_or_default().trim() {
        "" => BountyEligibility::Eligible,
        e if e.eq_ignore_ascii_case("eligible") => BountyEligibility::Eligible,
        e if e.eq_ignore_ascii_case("ineligible") => BountyEligibility::Ineligible,
        e => {
            return Err(format!(
                "invalid bounty eligibility: {} (expected eligible or ineligible)",
                e
            ))
        }
    };

    Ok(AssetDraft {
        kind,
        identifier: identifier.to_string(),
        description: description.to_string(),
        bounty_eligibility: eligibility,
    })
}

fn emit_error(json_output: bool, code: &str, message: &str) {
    if json_output {
        let issues = vec![JsonIssue {
            code: code.to_string(),
            severity: "error".to_string(),
            message: message.to_string(),
        }];
        let response: JsonResponse<Option<CreateData>> =
            JsonResponse::error("create", None, issues);
        println!("{}", serde_json::to_string_pretty(&response).unwrap());
    } else {
        eprintln!("error: {}", message);
    }
}

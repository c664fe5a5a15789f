//! Interactive program-creation form
//!
//! Drives the core `ProgramForm` through dialoguer prompts: scalar
//! fields, the calendar popover, and the asset staging loop with
//! duplicate detection.

use anyhow::{Context, Result};
use bountyboard_core::{
    AssetKind, BountyEligibility, ProgramForm, ProgramStore, StageRejection, StagingSession,
    SubmitRejection,
};
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use uuid::Uuid;

use super::theme::BoardTheme;
use super::{calendar, is_cancelled};
use crate::output::{bounty_badge, format_date};

const MENU: [&str; 5] = [
    "Add an asset",
    "Remove a staged asset",
    "Change start date",
    "Submit",
    "Cancel",
];

/// Run the creation form against the store
///
/// Returns the created program's id, or `None` if the user cancelled.
pub fn run_create_form(store: &mut ProgramStore, default_start: NaiveDate) -> Result<Option<Uuid>> {
    let theme = BoardTheme::new();
    let mut form = ProgramForm::new(default_start);

    println!("{}", "Create Program".magenta().bold());

    let name: String = Input::with_theme(&theme)
        .with_prompt("Program name")
        .allow_empty(true)
        .interact_text()
        .context("failed to read program name")?;
    form.set_name(name);

    calendar::pick_start_date(&mut form.date)?;
    println!("Start date: {}", format_date(form.date.committed()));

    let website: String = Input::with_theme(&theme)
        .with_prompt("Website")
        .allow_empty(true)
        .interact_text()
        .context("failed to read website")?;
    form.set_website(website);

    let twitter: String = Input::with_theme(&theme)
        .with_prompt("Twitter / X")
        .allow_empty(true)
        .interact_text()
        .context("failed to read handle")?;
    form.set_twitter_handle(twitter);

    loop {
        if is_cancelled() {
            form.cancel();
            println!("Creation cancelled");
            return Ok(None);
        }

        print_staged(&form.staging);

        let choice = Select::with_theme(&theme)
            .with_prompt("Program setup")
            .items(&MENU)
            .default(0)
            .interact()
            .context("failed to read menu selection")?;

        match choice {
            0 => add_asset(&mut form.staging, &theme)?,
            1 => remove_asset(&mut form.staging, &theme)?,
            2 => {
                calendar::pick_start_date(&mut form.date)?;
                println!("Start date: {}", format_date(form.date.committed()));
            }
            3 => match form.submit(store) {
                Ok(id) => {
                    println!("{} program created", "\u{2713}".green());
                    return Ok(Some(id));
                }
                Err(SubmitRejection::MissingName) => {
                    eprintln!("{} program name is required", "error:".red().bold());
                    let name: String = Input::with_theme(&theme)
                        .with_prompt("Program name")
                        .allow_empty(true)
                        .interact_text()
                        .context("failed to read program name")?;
                    form.set_name(name);
                }
            },
            _ => {
                form.cancel();
                println!("Creation cancelled");
                return Ok(None);
            }
        }
    }
}

/// Prompt the draft fields and stage the asset
fn add_asset(staging: &mut StagingSession, theme: &BoardTheme) -> Result<()> {
    let kinds = AssetKind::selectable();
    let kind_labels: Vec<&str> = kinds.iter().map(|k| k.label()).collect();
    let kind_idx = Select::with_theme(theme)
        .with_prompt("Asset you want to test")
        .items(&kind_labels)
        .default(0)
        .interact()
        .context("failed to read asset kind")?;
    staging.set_kind(kinds[kind_idx]);

    let identifier: String = Input::with_theme(theme)
        .with_prompt("Asset identifier")
        .allow_empty(true)
        .interact_text()
        .context("failed to read identifier")?;
    staging.set_identifier(identifier);

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()
        .context("failed to read description")?;
    staging.set_description(description);

    let eligibility_idx = Select::with_theme(theme)
        .with_prompt("Bounty eligibility")
        .items(&["Eligible", "Ineligible"])
        .default(0)
        .interact()
        .context("failed to read eligibility")?;
    staging.set_eligibility(if eligibility_idx == 0 {
        BountyEligibility::Eligible
    } else {
        BountyEligibility::Ineligible
    });

    match staging.add_draft() {
        Ok(()) => {}
        // Blank identifier: silent refusal, nothing staged
        Err(StageRejection::EmptyIdentifier) => {}
        Err(rejection @ StageRejection::DuplicateIdentifier { .. }) => {
            eprintln!("{} {}", "warning:".yellow().bold(), rejection);
        }
    }
    Ok(())
}

/// Pick a staged asset by position and remove it
fn remove_asset(staging: &mut StagingSession, theme: &BoardTheme) -> Result<()> {
    if staging.staged().is_empty() {
        println!("No staged assets");
        return Ok(());
    }

    let labels: Vec<String> = staging
        .staged()
        .iter()
        .map(|a| format!("{} {}", a.kind, a.identifier))
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Remove which asset?")
        .items(&labels)
        .default(0)
        .interact()
        .context("failed to read removal selection")?;

    staging.remove(index);
    Ok(())
}

/// Show the staged assets the way the table will render them
fn print_staged(staging: &StagingSession) {
    if staging.staged().is_empty() {
        return;
    }

    println!("\nStaged assets:");
    for asset in staging.staged() {
        println!(
            "  {:<7} {}  {}  {}",
            asset.kind.to_string(),
            asset.identifier.magenta(),
            asset.description,
            bounty_badge(asset.bounty_eligibility),
        );
    }
    println!();
}

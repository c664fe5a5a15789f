//! Implementation of the `bountyboard board` command
//!
//! One interactive session over a single in-memory store: view the
//! table, create, delete, and rename programs until the user quits.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bountyboard_core::{is_non_empty, ProgramPatch, ProgramStore};
use dialoguer::{Confirm, Input, Select};
use uuid::Uuid;

use crate::commands::{load_config, open_store};
use crate::interaction::{form, is_cancelled, setup_ctrl_c_handler, BoardTheme};
use crate::output::{flatten_rows, format_date, render_subscription, render_table};

const MENU: [&str; 4] = [
    "Create program",
    "Delete program",
    "Rename program",
    "Quit",
];

/// Run the interactive board session
pub fn run_board(quiet: bool, config_path: Option<PathBuf>) -> Result<i32, String> {
    if !std::io::stdin().is_terminal() {
        eprintln!("error: board requires an interactive terminal");
        return Ok(1);
    }

    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(e.exit_code());
        }
    };

    setup_ctrl_c_handler();
    let mut store = open_store(&config);
    let theme = BoardTheme::new();

    loop {
        if is_cancelled() {
            return Ok(0);
        }

        if !quiet {
            println!("{}", render_subscription(&config.subscription));
            println!();
            let rows = flatten_rows(store.list());
            if rows.is_empty() {
                println!("No programs found");
            } else {
                print!("{}", render_table(&rows));
            }
            println!();
        }

        let choice = match Select::with_theme(&theme)
            .with_prompt("Board")
            .items(&MENU)
            .default(0)
            .interact()
        {
            Ok(choice) => choice,
            Err(_) if is_cancelled() => return Ok(0),
            Err(e) => {
                eprintln!("error: {}", e);
                return Ok(1);
            }
        };

        let result = match choice {
            0 => form::run_create_form(&mut store, config.board.default_start_date).map(|_| ()),
            1 => delete_program(&mut store, &theme),
            2 => rename_program(&mut store, &theme),
            _ => return Ok(0),
        };

        if let Err(e) = result {
            eprintln!("error: {}", e);
            return Ok(1);
        }
    }
}

/// Pick a program and delete it after confirmation
fn delete_program(store: &mut ProgramStore, theme: &BoardTheme) -> Result<()> {
    let Some(id) = pick_program(store, theme, "Delete which program?")? else {
        return Ok(());
    };

    let name = store.get(id).map(|p| p.name.clone()).unwrap_or_default();
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Delete {}?", name))
        .default(false)
        .interact()
        .context("failed to read confirmation")?;

    if confirmed {
        store.delete(id);
    }
    Ok(())
}

/// Pick a program and set a new name on it
fn rename_program(store: &mut ProgramStore, theme: &BoardTheme) -> Result<()> {
    let Some(id) = pick_program(store, theme, "Rename which program?")? else {
        return Ok(());
    };

    let name: String = Input::with_theme(theme)
        .with_prompt("New name")
        .validate_with(|input: &String| {
            if is_non_empty(input) {
                Ok(())
            } else {
                Err("program name is required")
            }
        })
        .interact_text()
        .context("failed to read new name")?;

    store.update(
        id,
        ProgramPatch {
            name: Some(name),
            ..Default::default()
        },
    );
    Ok(())
}

/// Select a program from the store; `None` when the store is empty
fn pick_program(
    store: &ProgramStore,
    theme: &BoardTheme,
    prompt: &str,
) -> Result<Option<Uuid>> {
    if store.is_empty() {
        println!("No programs found");
        return Ok(None);
    }

    let labels: Vec<String> = store
        .list()
        .iter()
        .map(|p| {
            format!(
                "{} ({}, {} asset{})",
                p.name,
                format_date(p.start_date),
                p.assets.len(),
                if p.assets.len() == 1 { "" } else { "s" },
            )
        })
        .collect();

    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .context("failed to read program selection")?;

    Ok(Some(store.list()[index].id))
}

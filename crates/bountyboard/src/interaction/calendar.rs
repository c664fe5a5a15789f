//! Calendar popover for picking the start date
//!
//! Renders a month grid in raw mode and maps keys onto the core
//! `DateSelection` machine: arrows move the pending day, `[`/`]` (or
//! PgUp/PgDn) scroll the displayed month, Enter confirms, Esc cancels.
//! Terminals without raw-mode support fall back to a plain text prompt.

use std::io::Write;

use anyhow::{Context, Result};
use bountyboard_core::datepick::add_months;
use bountyboard_core::DateSelection;
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{cursor, queue, terminal};
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::theme::BoardTheme;
use super::request_cancel;
use crate::colors::COLORS;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Drive the date selection machine through one popover interaction
///
/// Opens the popover, loops on key input, and leaves the machine closed
/// with either a newly committed date (Enter) or the previous one (Esc).
pub fn pick_start_date(selection: &mut DateSelection) -> Result<()> {
    selection.open();

    if terminal::enable_raw_mode().is_err() {
        return text_fallback(selection);
    }

    let mut stdout = std::io::stdout();
    let _ = queue!(stdout, cursor::Hide);
    let result = run_popover(selection, &mut stdout);
    let _ = queue!(stdout, cursor::Show);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();

    // Never leave the popover dangling open on an input error
    if selection.is_open() {
        selection.cancel();
    }
    result
}

fn run_popover(selection: &mut DateSelection, stdout: &mut std::io::Stdout) -> Result<()> {
    let mut drawn: u16 = 0;

    loop {
        let lines = render_popover(selection);
        if drawn > 0 {
            queue!(
                stdout,
                cursor::MoveUp(drawn),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            )?;
        }
        for line in &lines {
            queue!(stdout, cursor::MoveToColumn(0), Print(line), Print("\r\n"))?;
        }
        stdout.flush()?;
        drawn = lines.len() as u16;

        let Event::Key(key) = event::read().context("failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let base = selection.pending().unwrap_or(selection.committed());
        match key.code {
            KeyCode::Left => selection.pick(base - Duration::days(1)),
            KeyCode::Right => selection.pick(base + Duration::days(1)),
            KeyCode::Up => selection.pick(base - Duration::days(7)),
            KeyCode::Down => selection.pick(base + Duration::days(7)),
            KeyCode::Char('[') | KeyCode::PageUp => selection.navigate_month(-1),
            KeyCode::Char(']') | KeyCode::PageDown => selection.navigate_month(1),
            KeyCode::Char('{') => selection.pick(add_months(base, -1)),
            KeyCode::Char('}') => selection.pick(add_months(base, 1)),
            KeyCode::Enter => {
                selection.confirm();
                return Ok(());
            }
            KeyCode::Esc => {
                selection.cancel();
                return Ok(());
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                selection.cancel();
                request_cancel();
                return Ok(());
            }
            _ => {}
        }
    }
}

/// Plain text prompt driving the same machine, for terminals without
/// raw-mode support
fn text_fallback(selection: &mut DateSelection) -> Result<()> {
    let theme = BoardTheme::new();
    loop {
        let input: String = Input::with_theme(&theme)
            .with_prompt("Start date (YYYY-MM-DD)")
            .default(selection.committed().to_string())
            .interact_text()
            .context("failed to read start date")?;

        match input.trim().parse::<NaiveDate>() {
            Ok(date) => {
                selection.pick(date);
                selection.confirm();
                return Ok(());
            }
            Err(_) => {
                eprintln!("{} not a valid date: {}", "warning:".yellow().bold(), input);
            }
        }
    }
}

/// Render the popover as display lines
fn render_popover(selection: &DateSelection) -> Vec<String> {
    let (year, month) = selection.view();

    let mut lines = vec![
        format!("{}", "Finalize start date".bold()),
        format!(
            "{}",
            format!("{} {}", MONTHS[month as usize - 1], year).style(COLORS.accent)
        ),
    ];
    lines.extend(render_month(year, month, selection.pending()));
    lines.push(format!(
        "{}",
        "arrows move day | [ ]/{ } month | Enter select | Esc cancel".dimmed()
    ));
    lines
}

/// Render a month grid, highlighting the pending day if it falls in
/// this month
fn render_month(year: i32, month: u32, pending: Option<NaiveDate>) -> Vec<String> {
    let mut lines = vec!["Su Mo Tu We Th Fr Sa".to_string()];

    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<String> = vec!["  ".to_string(); leading];
    for day in 1..=days_in_month(year, month) {
        let cell = format!("{:>2}", day);
        let is_pending = pending
            .map(|p| p.year() == year && p.month() == month && p.day() == day)
            .unwrap_or(false);
        if is_pending {
            cells.push(format!("{}", cell.reversed()));
        } else {
            cells.push(cell);
        }
    }

    for week in cells.chunks(7) {
        lines.push(week.join(" "));
    }
    lines
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .expect("valid month")
        .day()
}

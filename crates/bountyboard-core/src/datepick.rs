//! Date selection interaction for the start-date field
//!
//! A small state machine governing the calendar popover: open/closed,
//! month navigation, and the pending-versus-committed split. The
//! committed date is what the form binds; a pending date only becomes
//! committed on confirm.

use chrono::{Datelike, NaiveDate};

/// Calendar popover state machine
///
/// Invariant: `pending` is unset whenever the popover is closed.
/// Transitions invoked in the wrong state are no-ops; the machine is
/// reusable across open/close cycles.
#[derive(Debug, Clone)]
pub struct DateSelection {
    committed: NaiveDate,
    pending: Option<NaiveDate>,
    view_year: i32,
    view_month: u32,
    open: bool,
}

impl DateSelection {
    /// Create a closed machine with the given committed default
    pub fn new(default_committed: NaiveDate) -> Self {
        Self {
            committed: default_committed,
            pending: None,
            view_year: default_committed.year(),
            view_month: default_committed.month(),
            open: false,
        }
    }

    /// The date currently bound to the form's start-date field
    pub fn committed(&self) -> NaiveDate {
        self.committed
    }

    /// The tentative selection inside an open popover
    pub fn pending(&self) -> Option<NaiveDate> {
        self.pending
    }

    /// Whether the popover is visible
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The (year, month) the popover currently displays
    pub fn view(&self) -> (i32, u32) {
        (self.view_year, self.view_month)
    }

    /// Open the popover, seeding the pending selection from the
    /// committed value and jumping the view to its month
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.pending = Some(self.committed);
        self.view_year = self.committed.year();
        self.view_month = self.committed.month();
    }

    /// Shift the displayed month by `delta` months; `pending` untouched
    pub fn navigate_month(&mut self, delta: i32) {
        if !self.open {
            return;
        }
        let (year, month) = shift_month(self.view_year, self.view_month, delta);
        self.view_year = year;
        self.view_month = month;
    }

    /// Tentatively select a date; the view snaps to its month
    pub fn pick(&mut self, date: NaiveDate) {
        if !self.open {
            return;
        }
        self.pending = Some(date);
        self.view_year = date.year();
        self.view_month = date.month();
    }

    /// Close the popover, committing the pending selection if set
    pub fn confirm(&mut self) {
        if !self.open {
            return;
        }
        if let Some(pending) = self.pending.take() {
            self.committed = pending;
        }
        self.open = false;
    }

    /// Close the popover, discarding the pending selection
    pub fn cancel(&mut self) {
        if !self.open {
            return;
        }
        self.pending = None;
        self.open = false;
    }

    /// Close and restore the workflow-configured default committed date
    pub fn reset(&mut self, default_committed: NaiveDate) {
        *self = Self::new(default_committed);
    }
}

/// Shift a (year, month) pair by a signed number of months
fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 + delta;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

/// Add a signed number of months to a date, clamping the day to the
/// target month's length (Jan 31 plus one month lands on the last day
/// of February)
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let (year, month) = shift_month(date.year(), date.month(), delta);
    let mut day = date.day();
    loop {
        if let Some(shifted) = NaiveDate::from_ymd_opt(year, month, day) {
            return shifted;
        }
        day -= 1;
    }
}

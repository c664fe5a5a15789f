//! Integration tests for the creation workflow
//!
//! These exercise the store, staging session, date selection, and form
//! together the way the presentation layer drives them.

use bountyboard_core::{
    seed::seed_programs, AssetKind, BountyEligibility, ProgramForm, ProgramPatch, ProgramStore,
    StageRejection, SubmitRejection,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const DEFAULT_START: (i32, u32, u32) = (2021, 4, 6);

fn default_start() -> NaiveDate {
    let (y, m, d) = DEFAULT_START;
    date(y, m, d)
}

#[test]
fn test_create_program_end_to_end() {
    let mut store = ProgramStore::new();
    let mut form = ProgramForm::new(default_start());

    form.set_name("Acme Pentest");

    form.date.open();
    form.date.pick(date(2024, 1, 15));
    form.date.confirm();

    form.staging.set_kind(AssetKind::Web);
    form.staging.set_identifier("acme.com");
    form.staging.set_description("login");
    form.staging.set_eligibility(BountyEligibility::Eligible);
    form.staging.add_draft().unwrap();

    let id = form.submit(&mut store).unwrap();

    assert_eq!(store.len(), 1);
    let program = &store.list()[0];
    assert_eq!(program.id, id);
    assert_eq!(program.name, "Acme Pentest");
    assert_eq!(program.start_date, date(2024, 1, 15));
    assert_eq!(program.assets.len(), 1);
    assert_eq!(program.assets[0].identifier, "acme.com");

    // Staging and date state are back at their defaults
    assert!(form.staging.staged().is_empty());
    assert!(form.staging.draft().identifier.is_empty());
    assert_eq!(form.date.committed(), default_start());
    assert_eq!(form.date.pending(), None);
}

#[test]
fn test_refused_submit_leaves_store_unchanged() {
    let mut store = ProgramStore::new();
    let mut form = ProgramForm::new(default_start());

    form.date.open();
    form.date.pick(date(2024, 1, 15));
    form.date.confirm();
    form.staging.set_identifier("acme.com");
    form.staging.add_draft().unwrap();

    assert_eq!(form.submit(&mut store), Err(SubmitRejection::MissingName));

    assert!(store.list().is_empty());
    // Workflow still open with the staged asset intact
    assert_eq!(form.staging.staged().len(), 1);
    assert_eq!(form.date.committed(), date(2024, 1, 15));
}

#[test]
fn test_duplicate_scope_is_one_staging_session() {
    let mut store = ProgramStore::new();

    let mut form = ProgramForm::new(default_start());
    form.set_name("First");
    form.staging.set_identifier("Trustline.sa");
    form.staging.add_draft().unwrap();

    form.staging.set_identifier("trustline.SA");
    assert!(matches!(
        form.staging.add_draft(),
        Err(StageRejection::DuplicateIdentifier { .. })
    ));

    form.submit(&mut store).unwrap();

    // A new creation attempt may reuse an identifier already committed
    // to another program
    let mut next = ProgramForm::new(default_start());
    next.set_name("Second");
    next.staging.set_identifier("trustline.sa");
    next.staging.add_draft().unwrap();
    next.submit(&mut store).unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn test_list_is_reverse_chronological_with_unique_ids() {
    let mut store = ProgramStore::new();

    for name in ["one", "two", "three", "four"] {
        let mut form = ProgramForm::new(default_start());
        form.set_name(name);
        form.submit(&mut store).unwrap();
    }

    let names: Vec<_> = store.list().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["four", "three", "two", "one"]);

    let mut ids: Vec<_> = store.list().iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_delete_then_update_on_absent_id() {
    let mut store = ProgramStore::with_programs(seed_programs());
    let len = store.len();
    let id = store.list()[0].id;

    store.delete(id);
    assert_eq!(store.len(), len - 1);
    assert!(store.list().iter().all(|p| p.id != id));

    // Both operations are idempotent no-ops on the deleted id
    store.delete(id);
    store.update(
        id,
        ProgramPatch {
            name: Some("ghost".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(store.len(), len - 1);
    assert!(store.list().iter().all(|p| p.name != "ghost"));
}

#[test]
fn test_seeded_store_accepts_new_programs_at_front() {
    let mut store = ProgramStore::with_programs(seed_programs());
    let mut form = ProgramForm::new(default_start());
    form.set_name("Newest");
    form.submit(&mut store).unwrap();

    assert_eq!(store.list()[0].name, "Newest");
}

#[test]
fn test_cancel_midway_through_everything() {
    let mut store = ProgramStore::new();
    let mut form = ProgramForm::new(default_start());

    form.set_name("Half done");
    form.set_website("https://half.example");
    form.staging.set_identifier("half.example");
    form.staging.add_draft().unwrap();
    form.date.open();
    form.date.navigate_month(3);
    form.date.pick(date(2025, 2, 28));

    form.cancel();

    assert!(store.is_empty());
    assert!(form.name().is_empty());
    assert!(form.website().is_empty());
    assert!(form.staging.staged().is_empty());
    assert!(!form.date.is_open());
    assert_eq!(form.date.committed(), default_start());
    assert_eq!(form.date.pending(), None);
}

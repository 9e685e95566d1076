//! Behavior tests for the export wizard state machine.

use finboard_core::{ExportFormat, ExportWizard, WizardError, WizardStep};
use finboard_tests::company;

fn wizard_at_final_step(name: &str, reason: &str) -> ExportWizard {
    let mut wizard = ExportWizard::open();
    wizard.set_name(name);
    wizard.advance().expect("name step should advance");
    wizard.advance().expect("date step should advance");
    wizard.set_reason(reason);
    wizard
}

#[test]
fn when_the_name_is_blank_the_first_step_is_blocked() {
    // Given: a freshly opened wizard
    let mut wizard = ExportWizard::open();

    // When: advancing with an empty then whitespace-only name
    let empty = wizard.advance();
    wizard.set_name("   ");
    let whitespace = wizard.advance();

    // Then: both attempts are rejected and the step does not move
    assert_eq!(empty.expect_err("must fail"), WizardError::NameRequired);
    assert_eq!(whitespace.expect_err("must fail"), WizardError::NameRequired);
    assert_eq!(wizard.step(), WizardStep::Name);
}

#[test]
fn when_a_name_is_entered_the_first_step_unblocks() {
    let mut wizard = ExportWizard::open();
    wizard.set_name("Q1Report");

    assert!(wizard.can_advance());
    wizard.advance().expect("must advance");
    assert_eq!(wizard.step(), WizardStep::DateRange);
}

#[test]
fn the_date_step_advances_unconditionally() {
    let mut wizard = ExportWizard::open();
    wizard.set_name("Q1Report");
    wizard.advance().expect("must advance");

    assert!(wizard.can_advance());
    wizard.advance().expect("must advance");
    assert_eq!(wizard.step(), WizardStep::ReasonFormat);
}

#[test]
fn steps_walk_backward_one_at_a_time() {
    let mut wizard = wizard_at_final_step("Q1Report", "audit");

    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::DateRange);
    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Name);
    // Back from the first step signals dialog close.
    assert!(!wizard.back());
}

#[test]
fn when_the_range_matches_nothing_the_wizard_falls_back_to_the_date_step() {
    // Given: a completed draft whose window contains no record
    let mut wizard = wizard_at_final_step("Q1Report", "audit");
    let companies = [
        company("a", "AAA", "1999-01-01"),
        company("b", "BBB", "1998-06-01"),
    ];

    // When: the export is triggered
    let err = wizard.submit(&companies).expect_err("must be refused");

    // Then: the machine regresses automatically with the error flag set
    assert!(matches!(err, WizardError::NoDataInRange { .. }));
    assert_eq!(wizard.step(), WizardStep::DateRange);
    assert!(wizard.range_error());
}

#[test]
fn when_the_range_matches_records_submit_yields_a_job_and_resets() {
    // Given: two of three records inside the default window
    let mut wizard = wizard_at_final_step("Q1Report", "audit");
    wizard.set_format(ExportFormat::Csv);
    let companies = [
        company("a", "AAA", "2023-06-01"),
        company("b", "BBB", "1999-01-01"),
        company("c", "CCC", "2024-03-10"),
    ];

    // When: the export is triggered
    let job = wizard.submit(&companies).expect("submit should succeed");

    // Then: the job carries the matching rows and the draft is reset
    assert_eq!(job.rows.len(), 2);
    assert_eq!(job.base_name, "Q1Report");
    assert_eq!(job.file_name(), "Q1Report_financials.csv");
    assert_eq!(wizard.step(), WizardStep::Name);
    assert_eq!(wizard.name(), "");
    assert_eq!(wizard.reason(), "");
}

#[test]
fn the_range_filter_is_inclusive_on_both_edges() {
    let mut wizard = wizard_at_final_step("Edges", "audit");
    // Default window is 2023-03-10 ..= 2024-03-10.
    let companies = [
        company("start", "SSS", "2023-03-10"),
        company("end", "EEE", "2024-03-10"),
        company("after", "FFF", "2024-03-11"),
    ];

    let job = wizard.submit(&companies).expect("submit should succeed");
    assert_eq!(job.rows.len(), 2);
}

#[test]
fn a_blank_reason_blocks_the_export_without_moving_steps() {
    let mut wizard = wizard_at_final_step("Q1Report", "   ");
    let err = wizard
        .submit(&[company("a", "AAA", "2023-06-01")])
        .expect_err("must fail");
    assert_eq!(err, WizardError::ReasonRequired);
    assert_eq!(wizard.step(), WizardStep::ReasonFormat);
}

#[test]
fn an_inverted_window_simply_matches_nothing() {
    use time::macros::date;

    let mut wizard = wizard_at_final_step("Backwards", "audit");
    wizard.advance().expect_err("final step has no forward transition");
    wizard.back();
    wizard.set_range(date!(2024 - 12 - 31), date!(2023 - 01 - 01));
    wizard.advance().expect("date step should advance");

    let err = wizard
        .submit(&[company("a", "AAA", "2023-06-01")])
        .expect_err("must be refused");
    assert!(matches!(err, WizardError::NoDataInRange { .. }));
}

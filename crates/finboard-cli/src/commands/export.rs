//! The export wizard driver.
//!
//! Both entry points step the same [`ExportWizard`] machine: the scripted
//! path feeds it the flag values in step order, the interactive path
//! prompts per step on stderr and reads replies from stdin (`back` moves
//! one step back, a blank export name cancels).

use std::io::BufRead;

use finboard_core::{
    CompanyFeed, CompanyRecord, DiskExporter, ExportFormat, ExportWizard, FileExporter,
    WizardError, WizardStep,
};
use time::macros::format_description;
use time::Date;

use crate::cli::ExportArgs;
use crate::error::CliError;

const NO_DATA_MESSAGE: &str =
    "There is no data aligning with these dates, please select dates again!";

pub async fn run(args: &ExportArgs, feed: &dyn CompanyFeed) -> Result<(), CliError> {
    let board = super::load_board(feed).await?;
    let exporter = DiskExporter::new(args.out.clone());

    if args.is_scripted() {
        run_scripted(args, board.companies(), &exporter)
    } else {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        run_interactive(&mut input, board.companies(), &exporter)
    }
}

fn run_scripted(
    args: &ExportArgs,
    companies: &[CompanyRecord],
    exporter: &dyn FileExporter,
) -> Result<(), CliError> {
    let mut wizard = ExportWizard::open();

    wizard.set_name(args.name.as_deref().unwrap_or_default());
    wizard.advance()?;

    let start = parse_date(args.start.as_deref().unwrap_or_default())?;
    let end = parse_date(args.end.as_deref().unwrap_or_default())?;
    wizard.set_range(start, end);
    wizard.advance()?;

    wizard.set_reason(args.reason.as_deref().unwrap_or_default());
    wizard.set_format(ExportFormat::parse(&args.export_format)?);

    let job = wizard.submit(companies)?;
    let path = exporter.export(&job.rows, &job.base_name, job.format)?;
    eprintln!("✓ Exported {} rows to {}", job.rows.len(), path.display());
    Ok(())
}

fn run_interactive<R: BufRead>(
    input: &mut R,
    companies: &[CompanyRecord],
    exporter: &dyn FileExporter,
) -> Result<(), CliError> {
    let mut wizard = ExportWizard::open();

    loop {
        match wizard.step() {
            WizardStep::Name => {
                let Some(line) = prompt(input, "Export name (blank cancels): ")? else {
                    return cancelled();
                };
                if line.trim().is_empty() {
                    return cancelled();
                }
                wizard.set_name(line);
                wizard.advance()?;
            }
            WizardStep::DateRange => {
                if wizard.range_error() {
                    eprintln!("! {NO_DATA_MESSAGE}");
                }

                let start = match read_date(input, "Start date", wizard.start())? {
                    Reply::Eof => return cancelled(),
                    Reply::Back => {
                        if !wizard.back() {
                            return cancelled();
                        }
                        continue;
                    }
                    Reply::Value(date) => date,
                };
                let end = match read_date(input, "End date", wizard.end())? {
                    Reply::Eof => return cancelled(),
                    Reply::Back => {
                        if !wizard.back() {
                            return cancelled();
                        }
                        continue;
                    }
                    Reply::Value(date) => date,
                };

                wizard.set_range(start, end);
                wizard.advance()?;
            }
            WizardStep::ReasonFormat => {
                let Some(reason) = prompt(input, "Export reason (or 'back'): ")? else {
                    return cancelled();
                };
                if reason.trim() == "back" {
                    wizard.back();
                    continue;
                }
                wizard.set_reason(reason);

                let format_prompt = format!("Format csv/xlsx/pdf [{}]: ", wizard.format());
                let Some(choice) = prompt(input, &format_prompt)? else {
                    return cancelled();
                };
                let choice = choice.trim();
                if choice == "back" {
                    wizard.back();
                    continue;
                }
                if !choice.is_empty() {
                    match ExportFormat::parse(choice) {
                        Ok(format) => wizard.set_format(format),
                        Err(error) => {
                            eprintln!("! {error}");
                            continue;
                        }
                    }
                }

                match wizard.submit(companies) {
                    Ok(job) => {
                        let path = exporter.export(&job.rows, &job.base_name, job.format)?;
                        eprintln!("✓ Exported {} rows to {}", job.rows.len(), path.display());
                        return Ok(());
                    }
                    Err(WizardError::ReasonRequired) => {
                        eprintln!("! an export reason is required");
                    }
                    // The wizard has already regressed to the date step;
                    // the next loop turn re-prompts with the error shown.
                    Err(WizardError::NoDataInRange { .. }) => {}
                    Err(other) => return Err(other.into()),
                }
            }
        }
    }
}

enum Reply<T> {
    Eof,
    Back,
    Value(T),
}

fn read_date<R: BufRead>(
    input: &mut R,
    label: &str,
    default: Date,
) -> Result<Reply<Date>, CliError> {
    loop {
        let Some(line) = prompt(input, &format!("{label} [{default}]: "))? else {
            return Ok(Reply::Eof);
        };
        let trimmed = line.trim();
        if trimmed == "back" {
            return Ok(Reply::Back);
        }
        if trimmed.is_empty() {
            return Ok(Reply::Value(default));
        }
        match parse_date(trimmed) {
            Ok(date) => return Ok(Reply::Value(date)),
            Err(error) => eprintln!("! {error}"),
        }
    }
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>, CliError> {
    eprint!("{text}");
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

fn parse_date(input: &str) -> Result<Date, CliError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input.trim(), &format)
        .map_err(|_| CliError::Command(format!("invalid date '{input}', expected YYYY-MM-DD")))
}

fn cancelled() -> Result<(), CliError> {
    eprintln!("export cancelled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::path::PathBuf;

    use finboard_core::{
        CompanyId, ExportError, ExportRow, RevenueSnapshot, Symbol, UpdateStamp,
    };

    use super::*;

    #[derive(Default)]
    struct RecordingExporter {
        calls: RefCell<Vec<(usize, String, ExportFormat)>>,
    }

    impl FileExporter for RecordingExporter {
        fn export(
            &self,
            rows: &[ExportRow],
            base_name: &str,
            format: ExportFormat,
        ) -> Result<PathBuf, ExportError> {
            self.calls
                .borrow_mut()
                .push((rows.len(), base_name.to_owned(), format));
            Ok(PathBuf::from(finboard_core::file_name(base_name, format)))
        }
    }

    fn record(id: &str, last_updated: &str) -> CompanyRecord {
        CompanyRecord::new(
            CompanyId::parse(id).expect("id should parse"),
            Symbol::parse("AAA").expect("symbol should parse"),
            "Alpha",
            100.0,
            50.0,
            RevenueSnapshot::new(10.0, 8.0, 5.0).expect("revenue should validate"),
            1.0,
            2.0,
            3.0,
            4.0,
            10,
            0.5,
            UpdateStamp::parse(last_updated).expect("stamp should parse"),
        )
        .expect("record should validate")
    }

    #[test]
    fn happy_path_exports_once() {
        let companies = [record("a", "2023-06-01"), record("b", "2023-07-01")];
        let exporter = RecordingExporter::default();
        // name, keep default dates, reason, keep default format
        let mut input = Cursor::new("Q1Report\n\n\naudit\n\n");

        run_interactive(&mut input, &companies, &exporter).expect("wizard should finish");

        let calls = exporter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (2, String::from("Q1Report"), ExportFormat::Csv));
    }

    #[test]
    fn blank_name_cancels_without_exporting() {
        let companies = [record("a", "2023-06-01")];
        let exporter = RecordingExporter::default();
        let mut input = Cursor::new("\n");

        run_interactive(&mut input, &companies, &exporter).expect("cancel is not an error");
        assert!(exporter.calls.borrow().is_empty());
    }

    #[test]
    fn refused_range_reprompts_dates_then_exports() {
        let companies = [record("a", "2023-06-01")];
        let exporter = RecordingExporter::default();
        // First window misses the record, wizard falls back to the date
        // step, second window matches.
        let mut input = Cursor::new(
            "Q1Report\n1999-01-01\n1999-12-31\naudit\npdf\n2023-01-01\n2023-12-31\naudit\npdf\n",
        );

        run_interactive(&mut input, &companies, &exporter).expect("wizard should finish");

        let calls = exporter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (1, String::from("Q1Report"), ExportFormat::Pdf));
    }

    #[test]
    fn back_keyword_returns_to_previous_step() {
        let companies = [record("a", "2023-06-01")];
        let exporter = RecordingExporter::default();
        // Reach the reason step, go back, re-advance, then export.
        let mut input = Cursor::new("Q1Report\n\n\nback\n\n\naudit\nxlsx\n");

        run_interactive(&mut input, &companies, &exporter).expect("wizard should finish");

        let calls = exporter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2, ExportFormat::Xlsx);
    }

    #[test]
    fn eof_mid_wizard_cancels_cleanly() {
        let companies = [record("a", "2023-06-01")];
        let exporter = RecordingExporter::default();
        let mut input = Cursor::new("Q1Report\n");

        run_interactive(&mut input, &companies, &exporter).expect("cancel is not an error");
        assert!(exporter.calls.borrow().is_empty());
    }
}

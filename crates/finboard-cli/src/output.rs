//! Rendering of feed listings, comparison reports and revenue charts.

use finboard_core::{CompanyRecord, ComparisonReport, RevenueSeries};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

const CHART_WIDTH: usize = 40;

pub fn render_companies(
    companies: &[CompanyRecord],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(&companies, pretty),
        OutputFormat::Table => {
            println!("{:<10} {:<40} {}", "SYMBOL", "NAME", "LAST UPDATED");
            for company in companies {
                println!(
                    "{:<10} {:<40} {}",
                    company.symbol, company.name, company.last_updated
                );
            }
            Ok(())
        }
    }
}

pub fn render_comparison(
    report: &ComparisonReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(report, pretty),
        OutputFormat::Table => {
            if report.is_empty() {
                println!("no companies selected");
                return Ok(());
            }
            print_comparison_table(report);
            Ok(())
        }
    }
}

pub fn render_chart(
    series: &[RevenueSeries],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(&series, pretty),
        OutputFormat::Table => {
            let max = series
                .iter()
                .flat_map(|s| [s.current, s.previous_quarter, s.previous_year])
                .fold(0.0, f64::max);

            println!("Revenue Comparison");
            for entry in series {
                println!("{}", entry.symbol);
                print_bar("current", entry.current, max);
                print_bar("previous quarter", entry.previous_quarter, max);
                print_bar("previous year", entry.previous_year, max);
            }
            Ok(())
        }
    }
}

fn print_comparison_table(report: &ComparisonReport) {
    // Matrix of display cells, metric rows first, growth rows last.
    let mut rows: Vec<(String, Vec<String>)> = report
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| format!("{} ({})", format_value(cell.value), cell.deviation))
                .collect();
            (row.label.to_owned(), cells)
        })
        .collect();
    rows.push((
        String::from("Revenue Growth (QoQ)"),
        report.growth.iter().map(|g| g.qoq.to_string()).collect(),
    ));
    rows.push((
        String::from("Revenue Growth (YoY)"),
        report.growth.iter().map(|g| g.yoy.to_string()).collect(),
    ));

    let label_width = rows
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0)
        .max("Metrics".len());
    let column_widths: Vec<usize> = report
        .headings
        .iter()
        .enumerate()
        .map(|(index, heading)| {
            rows.iter()
                .map(|(_, cells)| cells[index].len())
                .max()
                .unwrap_or(0)
                .max(heading.len())
        })
        .collect();

    print!("{:<label_width$}", "Metrics");
    for (heading, &width) in report.headings.iter().zip(&column_widths) {
        print!(" | {heading:<width$}");
    }
    println!();

    for (label, cells) in &rows {
        print!("{label:<label_width$}");
        for (cell, &width) in cells.iter().zip(&column_widths) {
            print!(" | {cell:<width$}");
        }
        println!();
    }
}

fn print_bar(label: &str, value: f64, max: f64) {
    let width = if max == 0.0 {
        0
    } else {
        ((value / max) * CHART_WIDTH as f64).round() as usize
    };
    println!("  {:<17} {} {}", label, "█".repeat(width), format_value(value));
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

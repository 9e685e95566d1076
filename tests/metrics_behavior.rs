//! Behavior tests for the metrics engine and the comparison report.

use finboard_core::{
    max_metric, percent_below_max, revenue_growth, ComparisonReport, Deviation, Growth, Metric,
};
use finboard_tests::company;

#[test]
fn when_revenue_rises_growth_legs_are_positive_percentages() {
    // Given: current 100, previous quarter 80, previous year 50
    let record = company("a", "AAA", "2024-01-01");

    // When: growth is derived
    let growth = revenue_growth(&record);

    // Then: qoq is 25.00% and yoy is 100.00%
    assert_eq!(growth.qoq, Growth::Pct(25.0));
    assert_eq!(growth.yoy, Growth::Pct(100.0));
}

#[test]
fn when_revenue_falls_growth_is_negative() {
    let mut record = company("a", "AAA", "2024-01-01");
    record.revenue.current = 40.0;

    let growth = revenue_growth(&record);
    assert_eq!(growth.qoq, Growth::Pct(-50.0));
    assert_eq!(growth.yoy, Growth::Pct(-20.0));
}

#[test]
fn when_a_baseline_is_zero_growth_is_undefined_not_infinite() {
    // Given: a company with no revenue in the previous quarter
    let mut record = company("a", "AAA", "2024-01-01");
    record.revenue.previous_quarter = 0.0;

    // When: growth is derived
    let growth = revenue_growth(&record);

    // Then: the qoq leg is explicitly undefined and renders as such
    assert_eq!(growth.qoq, Growth::Undefined);
    assert_eq!(growth.qoq.to_string(), "undefined");
    assert_eq!(growth.yoy, Growth::Pct(100.0));
}

#[test]
fn when_the_selection_is_empty_max_metric_is_zero() {
    assert_eq!(max_metric([], Metric::TotalShares), 0.0);
    assert_eq!(max_metric([], Metric::EmployeeCount), 0.0);
}

#[test]
fn max_metric_picks_the_largest_value_across_the_selection() {
    let a = company("a", "AAA", "2024-01-01");
    let mut b = company("b", "BBB", "2024-01-01");
    b.total_shares = 800.0;

    assert_eq!(max_metric([&a, &b], Metric::TotalShares), 1000.0);
}

#[test]
fn deviation_of_the_leader_is_zero_and_laggards_report_their_shortfall() {
    // Given: total shares of 1000 and 800
    let max = 1000.0;

    // Then: the leader sits at max, the laggard is 20.00% below
    assert_eq!(percent_below_max(1000.0, max), Deviation::AtMax);
    assert_eq!(percent_below_max(800.0, max), Deviation::Below(20.0));
    assert_eq!(percent_below_max(800.0, max).to_string(), "-20.00%");
}

#[test]
fn zero_maximum_has_a_defined_deviation_policy() {
    assert_eq!(percent_below_max(0.0, 0.0), Deviation::AtMax);
}

#[test]
fn comparison_report_covers_all_metrics_in_selection_order() {
    let a = company("a", "AAA", "2024-01-01");
    let mut b = company("b", "BBB", "2024-01-01");
    b.total_shares = 800.0;

    let report = ComparisonReport::build(&[&b, &a]);

    assert_eq!(report.headings, vec!["Company BBB (BBB)", "Company AAA (AAA)"]);
    assert_eq!(report.rows.len(), Metric::ALL.len());
    let shares_row = &report.rows[0];
    assert_eq!(shares_row.metric, Metric::TotalShares);
    assert_eq!(shares_row.cells[0].deviation, Deviation::Below(20.0));
    assert_eq!(shares_row.cells[1].deviation, Deviation::AtMax);
}

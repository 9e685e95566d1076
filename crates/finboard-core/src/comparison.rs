//! Side-by-side comparison report over the selected companies.
//!
//! The report is pure presentation data: one column per selected company
//! (in selection order), one row per metric with each cell's deviation
//! from the row maximum, plus the two revenue growth rows. Rendering is
//! left to the caller.

use serde::Serialize;

use crate::metrics::{
    max_metric, percent_below_max, revenue_growth, Deviation, Metric, RevenueGrowth,
};
use crate::CompanyRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricCell {
    pub value: f64,
    pub deviation: Deviation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub label: &'static str,
    pub cells: Vec<MetricCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// `Name (SYMBOL)` headings in selection order.
    pub headings: Vec<String>,
    pub rows: Vec<MetricRow>,
    /// Per-company revenue growth, aligned with `headings`.
    pub growth: Vec<RevenueGrowth>,
}

impl ComparisonReport {
    pub fn build(selected: &[&CompanyRecord]) -> Self {
        let headings = selected.iter().map(|record| record.heading()).collect();

        let rows = Metric::ALL
            .iter()
            .map(|&metric| {
                let max = max_metric(selected.iter().copied(), metric);
                let cells = selected
                    .iter()
                    .map(|record| {
                        let value = metric.value(record);
                        MetricCell {
                            value,
                            deviation: percent_below_max(value, max),
                        }
                    })
                    .collect();
                MetricRow {
                    metric,
                    label: metric.label(),
                    cells,
                }
            })
            .collect();

        let growth = selected.iter().map(|record| revenue_growth(record)).collect();

        Self {
            headings,
            rows,
            growth,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}

/// One company's revenue series for the bar-chart view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSeries {
    pub symbol: String,
    pub current: f64,
    pub previous_quarter: f64,
    pub previous_year: f64,
}

/// Chart data in selection order.
pub fn revenue_chart(selected: &[&CompanyRecord]) -> Vec<RevenueSeries> {
    selected
        .iter()
        .map(|record| RevenueSeries {
            symbol: record.symbol.to_string(),
            current: record.revenue.current,
            previous_quarter: record.revenue.previous_quarter,
            previous_year: record.revenue.previous_year,
        })
        .collect()
}

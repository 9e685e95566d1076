//! Pure metric computations over company records.
//!
//! Nothing here performs I/O or holds state; every function maps records
//! already in memory to presentational figures.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::CompanyRecord;

/// A derived growth figure.
///
/// A zero baseline makes the percentage meaningless, so it is reported as
/// `Undefined` instead of letting `inf`/`NaN` escape into rendering or
/// serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "pct")]
pub enum Growth {
    Pct(f64),
    Undefined,
}

impl Growth {
    fn from_baseline(current: f64, baseline: f64) -> Self {
        if baseline == 0.0 {
            return Self::Undefined;
        }
        Self::Pct((current - baseline) / baseline * 100.0)
    }
}

impl Display for Growth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pct(pct) => write!(f, "{pct:.2}%"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

/// Quarter-over-quarter and year-over-year revenue growth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueGrowth {
    pub qoq: Growth,
    pub yoy: Growth,
}

/// Revenue growth legs for one company.
pub fn revenue_growth(record: &CompanyRecord) -> RevenueGrowth {
    RevenueGrowth {
        qoq: Growth::from_baseline(record.revenue.current, record.revenue.previous_quarter),
        yoy: Growth::from_baseline(record.revenue.current, record.revenue.previous_year),
    }
}

/// The comparable numeric fields of a company record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalShares,
    PromoterHolding,
    RevenueCurrent,
    Pat,
    Ebitda,
    FixedAssets,
    TotalLiabilities,
    EmployeeCount,
}

impl Metric {
    pub const ALL: [Self; 8] = [
        Self::TotalShares,
        Self::PromoterHolding,
        Self::RevenueCurrent,
        Self::Pat,
        Self::Ebitda,
        Self::FixedAssets,
        Self::TotalLiabilities,
        Self::EmployeeCount,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalShares => "Total Shares",
            Self::PromoterHolding => "Promoter Holding",
            Self::RevenueCurrent => "Revenue (Current)",
            Self::Pat => "PAT",
            Self::Ebitda => "EBITDA",
            Self::FixedAssets => "Fixed Assets",
            Self::TotalLiabilities => "Total Liabilities",
            Self::EmployeeCount => "Employee Count",
        }
    }

    pub fn value(self, record: &CompanyRecord) -> f64 {
        match self {
            Self::TotalShares => record.total_shares,
            Self::PromoterHolding => record.promoter_holding,
            Self::RevenueCurrent => record.revenue.current,
            Self::Pat => record.pat,
            Self::Ebitda => record.ebitda,
            Self::FixedAssets => record.fixed_assets,
            Self::TotalLiabilities => record.total_liabilities,
            Self::EmployeeCount => record.employee_count as f64,
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maximum of one metric across the given records. Empty input yields 0.0.
pub fn max_metric<'a, I>(records: I, metric: Metric) -> f64
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    records
        .into_iter()
        .map(|record| metric.value(record))
        .fold(0.0, f64::max)
}

/// How far a value sits below the row maximum.
///
/// The leader of a row reports `AtMax`, rendered as a neutral `0` rather
/// than a negative percentage. A zero maximum also reports `AtMax` (the
/// 0%-deviation policy for all-zero rows).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "pct")]
pub enum Deviation {
    AtMax,
    Below(f64),
}

impl Display for Deviation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtMax => f.write_str("0"),
            Self::Below(pct) => write!(f, "-{pct:.2}%"),
        }
    }
}

/// Percent deviation of `value` from `max`, reported as a deviation tag.
pub fn percent_below_max(value: f64, max: f64) -> Deviation {
    if max == 0.0 || value >= max {
        return Deviation::AtMax;
    }
    Deviation::Below((max - value) / max * 100.0)
}

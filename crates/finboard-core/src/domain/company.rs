use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, UpdateStamp, ValidationError};

/// Opaque unique key for a company, assigned by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyId(String);

impl CompanyId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCompanyId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CompanyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CompanyId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CompanyId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CompanyId> for String {
    fn from(value: CompanyId) -> Self {
        value.0
    }
}

/// Revenue figures for the current period and the two comparison baselines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSnapshot {
    pub current: f64,
    pub previous_quarter: f64,
    pub previous_year: f64,
}

impl RevenueSnapshot {
    pub fn new(
        current: f64,
        previous_quarter: f64,
        previous_year: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("revenue.current", current)?;
        validate_non_negative("revenue.previousQuarter", previous_quarter)?;
        validate_non_negative("revenue.previousYear", previous_year)?;

        Ok(Self {
            current,
            previous_quarter,
            previous_year,
        })
    }
}

/// Immutable snapshot of one listed company's financials.
///
/// Field names follow the feed's camelCase wire shape, with revenue kept
/// as a nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub symbol: Symbol,
    pub name: String,
    pub total_shares: f64,
    pub promoter_holding: f64,
    pub revenue: RevenueSnapshot,
    pub pat: f64,
    pub ebitda: f64,
    pub fixed_assets: f64,
    pub total_liabilities: f64,
    pub employee_count: u64,
    pub last_dividend: f64,
    pub last_updated: UpdateStamp,
}

impl CompanyRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CompanyId,
        symbol: Symbol,
        name: impl Into<String>,
        total_shares: f64,
        promoter_holding: f64,
        revenue: RevenueSnapshot,
        pat: f64,
        ebitda: f64,
        fixed_assets: f64,
        total_liabilities: f64,
        employee_count: u64,
        last_dividend: f64,
        last_updated: UpdateStamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }

        validate_non_negative("totalShares", total_shares)?;
        validate_non_negative("promoterHolding", promoter_holding)?;
        validate_non_negative("pat", pat)?;
        validate_non_negative("ebitda", ebitda)?;
        validate_non_negative("fixedAssets", fixed_assets)?;
        validate_non_negative("totalLiabilities", total_liabilities)?;
        validate_non_negative("lastDividend", last_dividend)?;

        Ok(Self {
            id,
            symbol,
            name,
            total_shares,
            promoter_holding,
            revenue,
            pat,
            ebitda,
            fixed_assets,
            total_liabilities,
            employee_count,
            last_dividend,
            last_updated,
        })
    }

    /// Column heading used by the comparison view: `Name (SYMBOL)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

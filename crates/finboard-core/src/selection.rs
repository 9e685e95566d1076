//! Partition of the company list into available and selected sets.

use std::collections::HashMap;

use thiserror::Error;

use crate::{CompanyId, CompanyRecord, ValidationError};

/// Errors raised by selection operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown company id '{id}'")]
    UnknownCompany { id: String },
}

/// Where a company currently sits. `rank` preserves selection order,
/// which drives comparison column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Available,
    Selected { rank: u64 },
}

/// The available/selected partition over the full company list.
///
/// One map from id to [`Slot`] is the only mutable state; both partitions
/// are derived views over the canonical record list, so an id can never be
/// in both (or neither) partition.
#[derive(Debug, Clone)]
pub struct SelectionBoard {
    companies: Vec<CompanyRecord>,
    slots: HashMap<CompanyId, Slot>,
    next_rank: u64,
}

impl SelectionBoard {
    /// Build a board with every company available. Rejects duplicate ids.
    pub fn new(companies: Vec<CompanyRecord>) -> Result<Self, ValidationError> {
        let mut slots = HashMap::with_capacity(companies.len());
        for record in &companies {
            if slots.insert(record.id.clone(), Slot::Available).is_some() {
                return Err(ValidationError::DuplicateCompanyId {
                    id: record.id.to_string(),
                });
            }
        }

        Ok(Self {
            companies,
            slots,
            next_rank: 0,
        })
    }

    /// Move a company into the selected set, appending to selection order.
    ///
    /// Returns `Ok(false)` without changing state when the company is
    /// already selected.
    pub fn select(&mut self, id: &CompanyId) -> Result<bool, SelectionError> {
        let rank = self.next_rank;
        let slot = self.slot_mut(id)?;
        match slot {
            Slot::Selected { .. } => Ok(false),
            Slot::Available => {
                *slot = Slot::Selected { rank };
                self.next_rank += 1;
                Ok(true)
            }
        }
    }

    /// Return a company to the available set.
    ///
    /// Returns `Ok(false)` without changing state when the company is not
    /// selected.
    pub fn remove(&mut self, id: &CompanyId) -> Result<bool, SelectionError> {
        let slot = self.slot_mut(id)?;
        match slot {
            Slot::Available => Ok(false),
            Slot::Selected { .. } => {
                *slot = Slot::Available;
                Ok(true)
            }
        }
    }

    /// Selected companies in selection order.
    pub fn selected(&self) -> Vec<&CompanyRecord> {
        let mut picked: Vec<(u64, &CompanyRecord)> = self
            .companies
            .iter()
            .filter_map(|record| match self.slots.get(&record.id) {
                Some(Slot::Selected { rank }) => Some((*rank, record)),
                _ => None,
            })
            .collect();
        picked.sort_by_key(|(rank, _)| *rank);
        picked.into_iter().map(|(_, record)| record).collect()
    }

    /// Available companies in feed order.
    pub fn available(&self) -> Vec<&CompanyRecord> {
        self.companies
            .iter()
            .filter(|record| matches!(self.slots.get(&record.id), Some(Slot::Available)))
            .collect()
    }

    pub fn is_selected(&self, id: &CompanyId) -> bool {
        matches!(self.slots.get(id), Some(Slot::Selected { .. }))
    }

    pub fn get(&self, id: &CompanyId) -> Option<&CompanyRecord> {
        self.companies.iter().find(|record| &record.id == id)
    }

    /// Look a company up by ticker.
    pub fn find_by_symbol(&self, symbol: &crate::Symbol) -> Option<&CompanyRecord> {
        self.companies.iter().find(|record| &record.symbol == symbol)
    }

    /// The full company list in feed order, regardless of partition.
    pub fn companies(&self) -> &[CompanyRecord] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    fn slot_mut(&mut self, id: &CompanyId) -> Result<&mut Slot, SelectionError> {
        self.slots
            .get_mut(id)
            .ok_or_else(|| SelectionError::UnknownCompany { id: id.to_string() })
    }
}

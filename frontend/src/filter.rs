//! Client-side filtering of the fetched transaction collection.
//!
//! The criteria are evaluated against an explicit `now` so the unset upper
//! bound advances with every render instead of being frozen at mount time.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{Transaction, TransactionType};

/// Lower bound used when no start date is selected.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn matches(&self, transaction: &Transaction, now: NaiveDateTime) -> bool {
        let start = self.start_date.unwrap_or_else(default_start_date);
        let end = self.end_date.unwrap_or_else(|| now.date());

        self.kind.map_or(true, |kind| transaction.kind.known() == Some(kind))
            && self
                .category
                .as_deref()
                .map_or(true, |category| transaction.category == category)
            && transaction.date >= start
            && transaction.date <= end
    }
}

/// Returns the transactions matching every criterion, in their original order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| criteria.matches(transaction, now))
        .collect()
}

/// The filter widgets, addressed by their input `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Type,
    Category,
    StartDate,
    EndDate,
}

impl FilterField {
    pub fn name(&self) -> &'static str {
        match self {
            FilterField::Type => "type",
            FilterField::Category => "category",
            FilterField::StartDate => "startDate",
            FilterField::EndDate => "endDate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "type" => Some(FilterField::Type),
            "category" => Some(FilterField::Category),
            "startDate" => Some(FilterField::StartDate),
            "endDate" => Some(FilterField::EndDate),
            _ => None,
        }
    }
}

/// Raw values of the filter panel exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterInputs {
    pub kind: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
}

impl FilterInputs {
    pub fn with_field(&self, field: FilterField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FilterField::Type => next.kind = value,
            FilterField::Category => next.category = value,
            FilterField::StartDate => next.start_date = value,
            FilterField::EndDate => next.end_date = value,
        }
        next
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Type => &self.kind,
            FilterField::Category => &self.category,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
        }
    }

    /// Empty or unparseable inputs leave the criterion unset.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            kind: TransactionType::parse(&self.kind),
            category: (!self.category.is_empty()).then(|| self.category.clone()),
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

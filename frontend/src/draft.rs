use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

/// A new transaction as typed into the entry form.
///
/// Every field is the raw input string; the backend does the coercion.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub installment_count: String,
    pub interest: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Type,
    Category,
    Amount,
    Date,
    InstallmentCount,
    Interest,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Type => "type",
            DraftField::Category => "category",
            DraftField::Amount => "amount",
            DraftField::Date => "date",
            DraftField::InstallmentCount => "installment_count",
            DraftField::Interest => "interest",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "type" => Some(DraftField::Type),
            "category" => Some(DraftField::Category),
            "amount" => Some(DraftField::Amount),
            "date" => Some(DraftField::Date),
            "installment_count" => Some(DraftField::InstallmentCount),
            "interest" => Some(DraftField::Interest),
            _ => None,
        }
    }
}

impl TransactionDraft {
    pub fn with_field(&self, field: DraftField, value: String) -> Self {
        let mut next = self.clone();
        *next.field_mut(field) = value;
        next
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Type => &self.kind,
            DraftField::Category => &self.category,
            DraftField::Amount => &self.amount,
            DraftField::Date => &self.date,
            DraftField::InstallmentCount => &self.installment_count,
            DraftField::Interest => &self.interest,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Type => &mut self.kind,
            DraftField::Category => &mut self.category,
            DraftField::Amount => &mut self.amount,
            DraftField::Date => &mut self.date,
            DraftField::InstallmentCount => &mut self.installment_count,
            DraftField::Interest => &mut self.interest,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DraftAction {
    Edit(DraftField, String),
    /// Sent once a submission succeeds. The form is only cleared if nothing
    /// was typed while the request was in flight.
    ClearIfUnchanged(TransactionDraft),
}

impl Reducible for TransactionDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Edit(field, value) => Rc::new(self.with_field(field, value)),
            DraftAction::ClearIfUnchanged(submitted) if *self == submitted => {
                Rc::new(TransactionDraft::default())
            }
            DraftAction::ClearIfUnchanged(_) => self,
        }
    }
}

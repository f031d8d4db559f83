use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The value the backend stores and the form submits.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "receita",
            TransactionType::Expense => "despesa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Receita",
            TransactionType::Expense => "Despesa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The stored type of a transaction.
///
/// The form submits whatever the select holds, so a record may carry a blank
/// or unexpected type; it is kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TransactionKind {
    Known(TransactionType),
    Other(String),
}

impl TransactionKind {
    pub fn known(&self) -> Option<TransactionType> {
        match self {
            TransactionKind::Known(kind) => Some(*kind),
            TransactionKind::Other(_) => None,
        }
    }
}

impl From<String> for TransactionKind {
    fn from(value: String) -> Self {
        match TransactionType::parse(&value) {
            Some(kind) => TransactionKind::Known(kind),
            None => TransactionKind::Other(value),
        }
    }
}

impl From<TransactionType> for TransactionKind {
    fn from(kind: TransactionType) -> Self {
        TransactionKind::Known(kind)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Known(kind) => kind.fmt(f),
            TransactionKind::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(deserialize_with = "loose_or_zero")]
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "loose")]
    pub installment_count: Option<u32>,
    #[serde(default, deserialize_with = "loose")]
    pub interest: Option<Decimal>,
}

/// A numeric column as the backend may return it: a number, a numeric
/// string, or the blank string the form submits for an empty input.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber<T> {
    Value(T),
    Text(String),
}

fn loose<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    let value = Option::<LooseNumber<T>>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Value(value)) => Some(value),
        Some(LooseNumber::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

fn loose_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?.unwrap_or(Decimal::ZERO))
}

/// One element of a fetched array; elements that fail to decode become
/// `Skipped` instead of failing the whole collection.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Decoded(T),
    Skipped(IgnoredAny),
}

/// Keeps the decoded records, in order, and counts the skipped ones.
pub fn decoded<T>(records: Vec<Lenient<T>>) -> (Vec<T>, usize) {
    let total = records.len();
    let list = records
        .into_iter()
        .filter_map(|record| match record {
            Lenient::Decoded(value) => Some(value),
            Lenient::Skipped(_) => None,
        })
        .collect::<Vec<_>>();
    let skipped = total - list.len();
    (list, skipped)
}

impl Transaction {
    /// One line for the transaction list: `date - category - type - amount`,
    /// followed by the installment and interest details when present.
    pub fn list_line(&self) -> String {
        let mut line = format!(
            "{} - {} - {} - {}",
            self.date,
            self.category,
            self.kind,
            format_amount(self.amount)
        );
        if let Some(count) = self.installment_count {
            line.push_str(&format!(" - {}x", count));
        }
        if let Some(interest) = self.interest {
            line.push_str(&format!(" - juros {}", interest.normalize()));
        }
        line
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DailyBalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlyBalancePoint {
    pub month: String,
    pub balance: Decimal,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub receita: Decimal,
    pub despesa: Decimal,
}

/// Formats an amount with two decimals and comma-grouped thousands.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{}{}.{}", sign, group_thousands(whole), cents)
}

fn group_thousands(whole: &str) -> String {
    let s = whole.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_deserializes_backend_payload() {
        let raw = r#"[
            {"id": 1, "type": "receita", "category": "Salary", "amount": 1000.0,
             "date": "2024-01-05", "installment_count": null, "interest": null},
            {"id": 2, "type": "despesa", "category": "Rent", "amount": 500.5,
             "date": "2024-01-10", "installment_count": 3, "interest": 1.5}
        ]"#;

        let transactions: Vec<Transaction> = serde_json::from_str(raw).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].kind.known(), Some(TransactionType::Income));
        assert_eq!(transactions[0].installment_count, None);
        assert_eq!(transactions[0].interest, None);
        assert_eq!(transactions[1].kind.known(), Some(TransactionType::Expense));
        assert_eq!(transactions[1].amount, Decimal::new(5005, 1));
        assert_eq!(transactions[1].installment_count, Some(3));
        assert_eq!(transactions[1].interest, Some(Decimal::new(15, 1)));
        assert_eq!(
            transactions[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    #[test]
    fn transaction_without_optional_fields_deserializes() {
        let raw = r#"{"id": 7, "type": "despesa", "category": "Food", "amount": 12,
                      "date": "2024-02-01"}"#;

        let transaction: Transaction = serde_json::from_str(raw).unwrap();

        assert_eq!(transaction.installment_count, None);
        assert_eq!(transaction.interest, None);
    }

    #[test]
    fn unexpected_transaction_type_is_kept_verbatim() {
        let raw = r#"[
            {"id": 7, "type": "income", "category": "Food", "amount": 12, "date": "2024-02-01"},
            {"id": 8, "type": "", "category": "Food", "amount": 3, "date": "2024-02-02"}
        ]"#;

        let transactions: Vec<Transaction> = serde_json::from_str(raw).unwrap();

        assert_eq!(transactions[0].kind, TransactionKind::Other("income".to_string()));
        assert_eq!(transactions[1].kind, TransactionKind::Other(String::new()));
        assert_eq!(transactions[1].kind.known(), None);
        assert_eq!(transactions[1].list_line(), "2024-02-02 - Food -  - 3.00");
    }

    #[test]
    fn blank_optional_numbers_decode_as_none() {
        let raw = r#"[
            {"id": 1, "type": "receita", "category": "Salary", "amount": 1000,
             "date": "2024-01-05", "installment_count": 2, "interest": 0.5},
            {"id": 2, "type": "despesa", "category": "Rent", "amount": 500,
             "date": "2024-01-10", "installment_count": "", "interest": "  "}
        ]"#;

        let transactions: Vec<Transaction> = serde_json::from_str(raw).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].installment_count, Some(2));
        assert_eq!(transactions[1].installment_count, None);
        assert_eq!(transactions[1].interest, None);
    }

    #[test]
    fn numeric_strings_decode_as_numbers() {
        let raw = r#"{"id": 3, "type": "despesa", "category": "Car", "amount": "250.75",
                      "date": "2024-03-01", "installment_count": "12", "interest": "1.9"}"#;

        let transaction: Transaction = serde_json::from_str(raw).unwrap();

        assert_eq!(transaction.amount, Decimal::new(25075, 2));
        assert_eq!(transaction.installment_count, Some(12));
        assert_eq!(transaction.interest, Some(Decimal::new(19, 1)));
    }

    #[test]
    fn blank_amount_decodes_as_zero() {
        let raw = r#"{"id": 4, "type": "despesa", "category": "Misc", "amount": "",
                      "date": "2024-03-02"}"#;

        let transaction: Transaction = serde_json::from_str(raw).unwrap();

        assert_eq!(transaction.amount, Decimal::ZERO);
    }

    #[test]
    fn undecodable_record_is_skipped_and_the_rest_kept() {
        let raw = r#"[
            {"id": 1, "type": "receita", "category": "Salary", "amount": 1000, "date": "2024-01-05"},
            {"id": 2, "type": "despesa", "category": "Rent", "amount": 500, "date": "soon"},
            {"id": 3, "type": "despesa", "category": "Food", "amount": 20, "date": "2024-01-12"}
        ]"#;

        let records: Vec<Lenient<Transaction>> = serde_json::from_str(raw).unwrap();
        let (transactions, skipped) = decoded(records);

        assert_eq!(skipped, 1);
        assert_eq!(
            transactions.iter().map(|tx| tx.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn balances_and_summary_deserialize() {
        let daily: Vec<DailyBalancePoint> =
            serde_json::from_str(r#"[{"date": "2024-01-01", "balance": 100.0}]"#).unwrap();
        let monthly: Vec<MonthlyBalancePoint> =
            serde_json::from_str(r#"[{"month": "2024-01", "balance": -20.25}]"#).unwrap();
        let summary: Vec<CategorySummary> = serde_json::from_str(
            r#"[{"category": "Rent", "receita": 0, "despesa": 500.0}]"#,
        )
        .unwrap();

        assert_eq!(daily[0].balance, Decimal::from(100));
        assert_eq!(monthly[0].month, "2024-01");
        assert_eq!(monthly[0].balance, Decimal::new(-2025, 2));
        assert_eq!(summary[0].receita, Decimal::ZERO);
        assert_eq!(summary[0].despesa, Decimal::from(500));
    }

    #[test]
    fn transaction_type_parses_wire_values_only() {
        assert_eq!(TransactionType::parse("receita"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("despesa"), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("Receita"), None);
        assert_eq!(TransactionType::parse(""), None);
    }

    #[test]
    fn list_line_matches_row_layout() {
        let mut transaction = Transaction {
            id: 2,
            kind: TransactionType::Expense.into(),
            category: "Rent".to_string(),
            amount: Decimal::from(500),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            installment_count: None,
            interest: None,
        };

        assert_eq!(transaction.list_line(), "2024-01-10 - Rent - despesa - 500.00");

        transaction.installment_count = Some(3);
        transaction.interest = Some(Decimal::new(150, 2));

        assert_eq!(
            transaction.list_line(),
            "2024-01-10 - Rent - despesa - 500.00 - 3x - juros 1.5"
        );
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(Decimal::from(1000)), "1,000.00");
        assert_eq!(format_amount(Decimal::new(12345678, 2)), "123,456.78");
        assert_eq!(format_amount(Decimal::new(-5005, 1)), "-500.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
        assert_eq!(format_amount(Decimal::new(999, 0)), "999.00");
    }
}

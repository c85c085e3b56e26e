//! Editable form state for the transaction and goal pages.
//!
//! Inputs are kept as the raw strings the user typed; conversion to request
//! payloads happens once, on submit.

use crate::error::FormError;
use crate::models::{Goal, GoalPayload, Transaction, TransactionKind, TransactionPayload};

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub notes: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            kind: TransactionKind::Expense,
            category: String::new(),
            amount: String::new(),
            date: String::new(),
            notes: String::new(),
        }
    }
}

impl TransactionForm {
    /// Prefills the form from an existing row for editing.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            kind: match tx.kind {
                TransactionKind::Income => TransactionKind::Income,
                _ => TransactionKind::Expense,
            },
            category: tx.category.clone(),
            amount: amount_input(tx.amount),
            date: tx.date.chars().take(10).collect(),
            notes: tx.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<TransactionPayload, FormError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::Missing("Category"));
        }
        let amount = parse_amount(&self.amount, "Amount")?.ok_or(FormError::Missing("Amount"))?;
        let date = self.date.trim();
        if date.is_empty() {
            return Err(FormError::Missing("Date"));
        }

        Ok(TransactionPayload {
            kind: self.kind,
            category: category.to_string(),
            amount,
            date: date.to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalForm {
    pub name: String,
    pub target_amount: String,
    pub deadline: String,
}

impl GoalForm {
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: amount_input(goal.target_amount),
            deadline: goal
                .deadline
                .as_deref()
                .and_then(|d| d.split('T').next())
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// An empty target counts as zero, matching how the backend treats it.
    pub fn to_payload(&self) -> Result<GoalPayload, FormError> {
        let target_amount = parse_amount(&self.target_amount, "Target amount")?.unwrap_or(0.0);
        Ok(GoalPayload {
            name: self.name.trim().to_string(),
            target_amount,
            deadline: self.deadline.trim().to_string(),
        })
    }
}

/// `Ok(None)` for a blank input, an error for anything that is not a finite
/// number.
fn parse_amount(raw: &str, field: &'static str) -> Result<Option<f64>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FormError::NotANumber(field)),
    }
}

fn amount_input(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TransactionForm {
        TransactionForm {
            kind: TransactionKind::Expense,
            category: " Groceries ".into(),
            amount: "125000".into(),
            date: "2024-04-10".into(),
            notes: "weekly shop".into(),
        }
    }

    #[test]
    fn new_form_defaults_to_expense() {
        let form = TransactionForm::default();
        assert_eq!(form.kind, TransactionKind::Expense);
        assert!(form.amount.is_empty());
    }

    #[test]
    fn submit_converts_amount_to_number() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.category, "Groceries");
        assert_eq!(payload.amount, 125_000.0);
        assert_eq!(payload.date, "2024-04-10");
        assert_eq!(payload.notes, "weekly shop");

        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["amount"].is_number());
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut form = filled();
        form.category = "  ".into();
        assert_eq!(form.to_payload(), Err(FormError::Missing("Category")));

        let mut form = filled();
        form.amount.clear();
        assert_eq!(form.to_payload(), Err(FormError::Missing("Amount")));

        let mut form = filled();
        form.date.clear();
        assert_eq!(form.to_payload(), Err(FormError::Missing("Date")));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let mut form = filled();
        form.amount = "12k".into();
        assert_eq!(form.to_payload(), Err(FormError::NotANumber("Amount")));

        form.amount = "inf".into();
        assert_eq!(form.to_payload(), Err(FormError::NotANumber("Amount")));
    }

    #[test]
    fn edit_prefill_truncates_timestamp() {
        let tx = Transaction {
            id: "t1".into(),
            kind: TransactionKind::Income,
            category: "Salary".into(),
            amount: 5_000_000.0,
            date: "2024-04-25T00:00:00.000Z".into(),
            notes: None,
        };
        let form = TransactionForm::from_transaction(&tx);
        assert_eq!(form.kind, TransactionKind::Income);
        assert_eq!(form.amount, "5000000");
        assert_eq!(form.date, "2024-04-25");
        assert_eq!(form.notes, "");
    }

    #[test]
    fn edit_prefill_of_untyped_row_picks_expense() {
        let tx = Transaction {
            id: "t2".into(),
            kind: TransactionKind::Other,
            category: "Transfer".into(),
            amount: 10.0,
            date: String::new(),
            notes: None,
        };
        let form = TransactionForm::from_transaction(&tx);
        assert_eq!(form.kind, TransactionKind::Expense);
        assert_eq!(form.date, "");
    }

    #[test]
    fn goal_prefill_keeps_date_part_of_deadline() {
        let goal = Goal {
            id: "g1".into(),
            name: "Emergency fund".into(),
            target_amount: 10_000_000.5,
            current_amount: 0.0,
            deadline: Some("2025-06-30T00:00:00.000Z".into()),
            status: "active".into(),
        };
        let form = GoalForm::from_goal(&goal);
        assert_eq!(form.deadline, "2025-06-30");
        assert_eq!(form.target_amount, "10000000.5");

        let no_deadline = Goal {
            deadline: None,
            ..goal
        };
        assert_eq!(GoalForm::from_goal(&no_deadline).deadline, "");
    }

    #[test]
    fn goal_target_is_coerced() {
        let form = GoalForm {
            name: "Holiday".into(),
            target_amount: "4500000".into(),
            deadline: "2024-12-01".into(),
        };
        assert_eq!(form.to_payload().unwrap().target_amount, 4_500_000.0);

        let blank = GoalForm {
            target_amount: String::new(),
            ..form.clone()
        };
        assert_eq!(blank.to_payload().unwrap().target_amount, 0.0);

        let bad = GoalForm {
            target_amount: "lots".into(),
            ..form
        };
        assert_eq!(bad.to_payload(), Err(FormError::NotANumber("Target amount")));
    }
}

//! Aggregates the dashboard and goal views compute from the fetched lists.

use std::collections::{BTreeMap, HashMap};

use crate::format::parse_day;
use crate::models::{Goal, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => totals.income += tx.amount,
            TransactionKind::Expense => totals.expense += tx.amount,
            TransactionKind::Other => {}
        }
    }
    totals.net = totals.income - totals.expense;
    totals
}

/// Income and expense per calendar day, oldest first. Anything that is not
/// income lands on the expense line; rows with an unreadable date are left
/// out.
pub fn daily_series(transactions: &[Transaction]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for tx in transactions {
        let Some(day) = parse_day(&tx.date) else {
            log::warn!("Skipping transaction {} with unreadable date {:?}", tx.id, tx.date);
            continue;
        };
        let entry = days.entry(day.format("%Y-%m-%d").to_string()).or_insert((0.0, 0.0));
        match tx.kind {
            TransactionKind::Income => entry.0 += tx.amount,
            TransactionKind::Expense | TransactionKind::Other => entry.1 += tx.amount,
        }
    }

    days.into_iter()
        .map(|(date, (income, expense))| DailyPoint {
            date,
            income,
            expense,
        })
        .collect()
}

/// Expense totals per category in the order categories first appear.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tx in transactions.iter().filter(|t| t.kind == TransactionKind::Expense) {
        match index.get(tx.category.as_str()) {
            Some(&i) => slices[i].value += tx.amount,
            None => {
                index.insert(tx.category.as_str(), slices.len());
                slices.push(CategorySlice {
                    name: tx.category.clone(),
                    value: tx.amount,
                });
            }
        }
    }

    slices
}

/// Percentage of `total` that `value` makes up; 0 when there is no total.
pub fn category_share(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total * 100.0
    }
}

/// Saved fraction of the target, clamped to `0.0..=1.0`.
pub fn goal_progress(goal: &Goal) -> f64 {
    if goal.target_amount > 0.0 {
        (goal.current_amount / goal.target_amount).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionKind, category: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: format!("{}-{}", category, date),
            kind,
            category: category.to_string(),
            amount,
            date: date.to_string(),
            notes: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(TransactionKind::Income, "Salary", 8_000_000.0, "2024-03-01T00:00:00.000Z"),
            tx(TransactionKind::Expense, "Food", 150_000.0, "2024-03-02"),
            tx(TransactionKind::Expense, "Transport", 50_000.0, "2024-03-01"),
            tx(TransactionKind::Expense, "Food", 100_000.0, "2024-03-01T12:00:00.000Z"),
            tx(TransactionKind::Income, "Freelance", 1_000_000.0, "2024-02-28"),
        ]
    }

    #[test]
    fn totals_split_by_type() {
        let totals = totals(&sample());
        assert_eq!(totals.income, 9_000_000.0);
        assert_eq!(totals.expense, 300_000.0);
        assert_eq!(totals.net, 8_700_000.0);
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn net_goes_negative_when_spending_exceeds_income() {
        let list = vec![
            tx(TransactionKind::Income, "Salary", 100.0, "2024-01-01"),
            tx(TransactionKind::Expense, "Rent", 250.0, "2024-01-02"),
        ];
        assert_eq!(totals(&list).net, -150.0);
    }

    #[test]
    fn daily_series_groups_and_sorts_by_day() {
        let series = daily_series(&sample());
        let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-28", "2024-03-01", "2024-03-02"]);

        assert_eq!(series[1].income, 8_000_000.0);
        assert_eq!(series[1].expense, 150_000.0);
        assert_eq!(series[2].income, 0.0);
        assert_eq!(series[2].expense, 150_000.0);
    }

    #[test]
    fn daily_series_skips_unreadable_dates() {
        let list = vec![
            tx(TransactionKind::Expense, "Food", 10.0, "not a date"),
            tx(TransactionKind::Expense, "Food", 20.0, "2024-05-05"),
        ];
        let series = daily_series(&list);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].expense, 20.0);
    }

    #[test]
    fn other_types_chart_as_expense_but_stay_out_of_totals() {
        let list = vec![
            tx(TransactionKind::Income, "Salary", 500.0, "2024-06-01"),
            tx(TransactionKind::Other, "Transfer", 120.0, "2024-06-01"),
            tx(TransactionKind::Expense, "Food", 30.0, "2024-06-01"),
            tx(TransactionKind::Other, "Transfer", 10.0, ""),
        ];

        let series = daily_series(&list);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].income, 500.0);
        assert_eq!(series[0].expense, 150.0);

        let totals = totals(&list);
        assert_eq!(totals.expense, 30.0);
        assert_eq!(totals.net, 470.0);

        let slices = expenses_by_category(&list);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].name, "Food");
    }

    #[test]
    fn categories_keep_first_seen_order_and_ignore_income() {
        let slices = expenses_by_category(&sample());
        assert_eq!(
            slices,
            vec![
                CategorySlice {
                    name: "Food".into(),
                    value: 250_000.0
                },
                CategorySlice {
                    name: "Transport".into(),
                    value: 50_000.0
                },
            ]
        );
    }

    #[test]
    fn category_share_handles_zero_total() {
        assert_eq!(category_share(50.0, 200.0), 25.0);
        assert_eq!(category_share(0.0, 0.0), 0.0);
    }

    #[test]
    fn goal_progress_is_clamped() {
        let mut goal = Goal {
            id: "g".into(),
            name: "Bike".into(),
            target_amount: 2_000_000.0,
            current_amount: 500_000.0,
            deadline: None,
            status: "active".into(),
        };
        assert_eq!(goal_progress(&goal), 0.25);

        goal.current_amount = 3_000_000.0;
        assert_eq!(goal_progress(&goal), 1.0);

        goal.target_amount = 0.0;
        assert_eq!(goal_progress(&goal), 0.0);
    }
}

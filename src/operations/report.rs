use crate::db::expense_repository;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Debug)]
pub struct CategoryShare {
    pub category: String,
    pub total: Decimal,
    /// Share of total spend, in percent rounded to one decimal place.
    pub share: Decimal,
}

#[derive(Debug)]
pub struct ExpenseBreakdown {
    pub shares: Vec<CategoryShare>,
    pub total_spend: Decimal,
}

impl ExpenseBreakdown {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

pub fn build_expense_breakdown(conn: &Connection, user_id: i64) -> Result<ExpenseBreakdown, String> {
    let expenses = expense_repository::get_expenses_for_user(conn, user_id)?;

    let mut category_totals: HashMap<String, Decimal> = HashMap::new();
    for expense in &expenses {
        let entry = category_totals
            .entry(expense.category.clone())
            .or_insert(Decimal::ZERO);
        *entry += expense.amount;
    }

    let total_spend = category_totals
        .values()
        .fold(Decimal::ZERO, |acc, total| acc + *total);

    let mut totals: Vec<(String, Decimal)> = category_totals.into_iter().collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let hundred = Decimal::from(100);
    let shares = totals
        .into_iter()
        .map(|(category, total)| {
            let share = if total_spend.is_zero() {
                Decimal::ZERO
            } else {
                (total * hundred / total_spend).round_dp(1)
            };
            CategoryShare {
                category,
                total,
                share,
            }
        })
        .collect();

    Ok(ExpenseBreakdown {
        shares,
        total_spend,
    })
}

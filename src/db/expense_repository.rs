use crate::models::expense::Expense;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn add_expense(conn: &Connection, expense: &Expense) -> Result<(), String> {
    conn.execute(
        "INSERT INTO expenses (id, user_id, amount, category, description, date) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            &expense.id,
            expense.user_id,
            expense.amount.to_string(),
            &expense.category,
            &expense.description,
            expense.date.to_string(),
        ],
    )
    .map_err(|e| format!("Failed to insert expense: {}", e))?;

    Ok(())
}

pub fn get_expenses_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Expense>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, amount, category, description, date FROM expenses \n             WHERE user_id = ?1 ORDER BY rowid ASC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let expense_iter = stmt
        .query_map([user_id], map_expense_row)
        .map_err(|e| format!("Failed to query expenses: {}", e))?;

    let mut expenses = Vec::new();
    for expense in expense_iter {
        expenses.push(expense.map_err(|e| format!("Failed to parse expense: {}", e))?);
    }

    Ok(expenses)
}

// Category comparison is byte-exact: "Food", "food" and " Food" are three
// different categories, matching how budgets are looked up against them.
pub fn get_expenses_by_category(
    conn: &Connection,
    user_id: i64,
    category: &str,
) -> Result<Vec<Expense>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, amount, category, description, date FROM expenses \n             WHERE user_id = ?1 AND category = ?2 ORDER BY rowid ASC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let expense_iter = stmt
        .query_map(rusqlite::params![user_id, category], map_expense_row)
        .map_err(|e| format!("Failed to query expenses: {}", e))?;

    let mut expenses = Vec::new();
    for expense in expense_iter {
        expenses.push(expense.map_err(|e| format!("Failed to parse expense: {}", e))?);
    }

    Ok(expenses)
}

fn map_expense_row(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
    let amount_str: String = row.get(2)?;
    let date_str: String = row.get(5)?;

    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        amount: Decimal::from_str(&amount_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        category: row.get(3)?,
        description: row.get(4)?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
    })
}

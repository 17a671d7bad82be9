use crate::models::budget::CategoryBudget;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

// Plain INSERT on purpose: nothing de-duplicates (user_id, category), so
// setting the same category twice leaves two rows and both get checked.
pub fn add_budget(
    conn: &Connection,
    user_id: i64,
    category: &str,
    amount: &Decimal,
) -> Result<(), String> {
    conn.execute(
        "INSERT INTO budgets (user_id, category, amount) VALUES (?1, ?2, ?3)",
        rusqlite::params![user_id, category, amount.to_string()],
    )
    .map_err(|e| format!("Failed to insert budget: {}", e))?;
    Ok(())
}

pub fn get_budgets_for_user(conn: &Connection, user_id: i64) -> Result<Vec<CategoryBudget>, String> {
    let mut stmt = conn
        .prepare("SELECT id, user_id, category, amount FROM budgets WHERE user_id = ?1 ORDER BY id ASC")
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let iter = stmt
        .query_map([user_id], |row| {
            let amount_str: String = row.get(3)?;
            let amount = Decimal::from_str(&amount_str)
                .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?;
            Ok(CategoryBudget {
                id: row.get(0)?,
                user_id: row.get(1)?,
                category: row.get(2)?,
                amount,
            })
        })
        .map_err(|e| format!("Failed to query budgets: {}", e))?;

    let mut budgets = Vec::new();
    for budget in iter {
        budgets.push(budget.map_err(|e| format!("Failed to parse budget: {}", e))?);
    }
    Ok(budgets)
}

use crate::models::income::Income;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn add_income(conn: &Connection, income: &Income) -> Result<(), String> {
    conn.execute(
        "INSERT INTO income (id, user_id, amount, description, date) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            &income.id,
            income.user_id,
            income.amount.to_string(),
            &income.description,
            income.date.to_string(),
        ],
    )
    .map_err(|e| format!("Failed to insert income: {}", e))?;

    Ok(())
}

pub fn get_income_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Income>, String> {
    let mut stmt = conn
        .prepare("SELECT id, user_id, amount, description, date FROM income WHERE user_id = ?1 ORDER BY rowid ASC")
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let income_iter = stmt
        .query_map([user_id], |row| {
            let amount_str: String = row.get(2)?;
            let date_str: String = row.get(4)?;

            Ok(Income {
                id: row.get(0)?,
                user_id: row.get(1)?,
                amount: Decimal::from_str(&amount_str)
                    .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
                description: row.get(3)?,
                date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
            })
        })
        .map_err(|e| format!("Failed to query income: {}", e))?;

    let mut records = Vec::new();
    for income in income_iter {
        records.push(income.map_err(|e| format!("Failed to parse income: {}", e))?);
    }

    Ok(records)
}

use crate::db::{expense_repository, income_repository};
use crate::models::expense::Expense;
use crate::models::income::Income;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn add_income_db(
    conn: &Connection,
    user_id: i64,
    amount_str: &str,
    description: &str,
    date_str: &str,
) -> Result<(), String> {
    let income = create_income(user_id, date_str, amount_str, description)?;
    income_repository::add_income(conn, &income)
}

pub fn add_expense_db(
    conn: &Connection,
    user_id: i64,
    amount_str: &str,
    category: &str,
    description: &str,
    date_str: &str,
) -> Result<(), String> {
    let expense = create_expense(user_id, date_str, amount_str, category, description)?;
    expense_repository::add_expense(conn, &expense)
}

pub fn create_income(
    user_id: i64,
    date_str: &str,
    amount_str: &str,
    description: &str,
) -> Result<Income, String> {
    let date = parse_date(date_str)?;
    let amount = parse_amount(amount_str)?;
    let description = parse_description(description)?;

    Ok(Income::new(
        Uuid::new_v4().to_string(),
        user_id,
        amount,
        description,
        date,
    ))
}

pub fn create_expense(
    user_id: i64,
    date_str: &str,
    amount_str: &str,
    category: &str,
    description: &str,
) -> Result<Expense, String> {
    let date = parse_date(date_str)?;
    let amount = parse_amount(amount_str)?;
    let category = parse_category(category)?;
    let description = parse_description(description)?;

    Ok(Expense::new(
        Uuid::new_v4().to_string(),
        user_id,
        amount,
        category,
        description,
        date,
    ))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let amount = raw.parse::<Decimal>().map_err(|_| {
        format!(
            "Invalid amount format {}. Please provide a valid decimal number.",
            raw
        )
    })?;
    if amount < Decimal::ZERO {
        return Err("Amount cannot be negative.".to_string());
    }
    Ok(amount)
}

// Stored exactly as entered. "Food" and "food " stay distinct categories, so
// the only rejected value is an all-whitespace one.
fn parse_category(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("Category cannot be empty".to_string());
    }
    if raw.len() > 50 {
        return Err("Category too long".to_string());
    }
    Ok(raw.to_string())
}

fn parse_description(raw: &str) -> Result<String, String> {
    if raw.len() > 255 {
        return Err("Description too long".to_string());
    }
    Ok(raw.to_string())
}

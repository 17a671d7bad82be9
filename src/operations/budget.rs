use crate::db::{budget_repository, expense_repository};
use crate::models::budget::{BudgetStatus, CategoryBudget};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn set_budget_db(
    conn: &Connection,
    user_id: i64,
    category: &str,
    amount_str: &str,
) -> Result<(), String> {
    let amount = Decimal::from_str(amount_str)
        .map_err(|_| format!("Invalid budget amount '{}'. Must be a valid number", amount_str))?;
    if amount < Decimal::ZERO {
        return Err("Budget amount cannot be negative".to_string());
    }
    if category.trim().is_empty() {
        return Err("Category cannot be empty".to_string());
    }
    budget_repository::add_budget(conn, user_id, category, &amount)
}

pub fn list_budgets_db(conn: &Connection, user_id: i64) -> Result<Vec<CategoryBudget>, String> {
    budget_repository::get_budgets_for_user(conn, user_id)
}

/// Walks the user's budgets in insertion order and sums the expenses whose
/// category is exactly equal to each budget's category. A category with no
/// expenses totals zero; a total equal to the limit is not an overrun.
pub fn check_budgets_db(conn: &Connection, user_id: i64) -> Result<Vec<BudgetStatus>, String> {
    let budgets = budget_repository::get_budgets_for_user(conn, user_id)?;

    let mut statuses = Vec::with_capacity(budgets.len());
    for budget in budgets {
        let expenses = expense_repository::get_expenses_by_category(conn, user_id, &budget.category)?;
        let spent = expenses
            .iter()
            .fold(Decimal::ZERO, |acc, expense| acc + expense.amount);

        statuses.push(BudgetStatus {
            exceeded: spent > budget.amount,
            category: budget.category,
            limit: budget.amount,
            spent,
        });
    }

    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use crate::models::expense::Expense;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn insert_expense(conn: &Connection, user_id: i64, category: &str, amount: &str) {
        let expense = Expense::new(
            Uuid::new_v4().to_string(),
            user_id,
            Decimal::from_str(amount).unwrap(),
            category.to_string(),
            "Test Expense".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        expense_repository::add_expense(conn, &expense).unwrap();
    }

    #[test]
    fn test_set_budget_success() {
        let conn = establish_test_connection().unwrap();

        let result = set_budget_db(&conn, 1, "Food", "200");
        assert!(result.is_ok());

        let budgets = list_budgets_db(&conn, 1).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].category, "Food");
    }

    #[test]
    fn test_set_budget_invalid_amount() {
        let conn = establish_test_connection().unwrap();

        let result = set_budget_db(&conn, 1, "Food", "not-a-number");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid budget amount"));
    }

    #[test]
    fn test_set_budget_negative_amount() {
        let conn = establish_test_connection().unwrap();

        let result = set_budget_db(&conn, 1, "Food", "-200");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Budget amount cannot be negative");
    }

    #[test]
    fn test_set_budget_empty_category() {
        let conn = establish_test_connection().unwrap();

        let result = set_budget_db(&conn, 1, "", "200");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Category cannot be empty");
    }

    #[test]
    fn test_check_budgets_under_limit() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Food", "200").unwrap();
        insert_expense(&conn, 1, "Food", "50");
        insert_expense(&conn, 1, "Food", "60");

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].category, "Food");
        assert_eq!(statuses[0].limit, Decimal::from_str("200").unwrap());
        assert_eq!(statuses[0].spent, Decimal::from_str("110").unwrap());
        assert!(!statuses[0].exceeded);
    }

    #[test]
    fn test_check_budgets_over_limit() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Rent", "1000").unwrap();
        insert_expense(&conn, 1, "Rent", "1200");

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].spent, Decimal::from_str("1200").unwrap());
        assert!(statuses[0].exceeded);
    }

    #[test]
    fn test_check_budgets_no_expenses_totals_zero() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Travel", "300").unwrap();

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].spent, Decimal::ZERO);
        assert!(!statuses[0].exceeded);
    }

    #[test]
    fn test_check_budgets_spend_equal_to_limit_is_not_exceeded() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Food", "110").unwrap();
        insert_expense(&conn, 1, "Food", "50");
        insert_expense(&conn, 1, "Food", "60");

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert_eq!(statuses[0].spent, statuses[0].limit);
        assert!(!statuses[0].exceeded);
    }

    #[test]
    fn test_check_budgets_total_is_order_independent() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Food", "200").unwrap();
        set_budget_db(&conn, 2, "Food", "200").unwrap();
        insert_expense(&conn, 1, "Food", "17.25");
        insert_expense(&conn, 1, "Food", "0.75");
        insert_expense(&conn, 1, "Food", "42");
        insert_expense(&conn, 2, "Food", "42");
        insert_expense(&conn, 2, "Food", "17.25");
        insert_expense(&conn, 2, "Food", "0.75");

        let first = check_budgets_db(&conn, 1).unwrap();
        let second = check_budgets_db(&conn, 2).unwrap();
        assert_eq!(first[0].spent, Decimal::from_str("60.00").unwrap());
        assert_eq!(first[0].spent, second[0].spent);
    }

    #[test]
    fn test_check_budgets_duplicate_rows_each_report() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Food", "200").unwrap();
        set_budget_db(&conn, 1, "Food", "100").unwrap();
        insert_expense(&conn, 1, "Food", "150");

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].spent, statuses[1].spent);
        assert!(!statuses[0].exceeded);
        assert!(statuses[1].exceeded);
    }

    #[test]
    fn test_check_budgets_insertion_order() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Travel", "300").unwrap();
        set_budget_db(&conn, 1, "Food", "200").unwrap();
        set_budget_db(&conn, 1, "Rent", "1000").unwrap();

        let statuses = check_budgets_db(&conn, 1).unwrap();
        let categories: Vec<&str> = statuses.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Travel", "Food", "Rent"]);
    }

    #[test]
    fn test_check_budgets_exact_category_match() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Food", "200").unwrap();
        insert_expense(&conn, 1, "food", "50");
        insert_expense(&conn, 1, "Food ", "60");
        insert_expense(&conn, 1, "Food", "70");

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert_eq!(statuses[0].spent, Decimal::from_str("70").unwrap());
    }

    #[test]
    fn test_check_budgets_ignores_other_users() {
        let conn = establish_test_connection().unwrap();

        set_budget_db(&conn, 1, "Food", "200").unwrap();
        insert_expense(&conn, 1, "Food", "50");
        insert_expense(&conn, 2, "Food", "500");

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].spent, Decimal::from_str("50").unwrap());
        assert!(!statuses[0].exceeded);
    }

    #[test]
    fn test_check_budgets_no_budgets() {
        let conn = establish_test_connection().unwrap();

        insert_expense(&conn, 1, "Food", "50");

        let statuses = check_budgets_db(&conn, 1).unwrap();
        assert!(statuses.is_empty());
    }
}

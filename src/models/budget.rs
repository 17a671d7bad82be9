use rust_decimal::Decimal;

#[derive(Debug)]
pub struct CategoryBudget {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: Decimal,
}

/// Outcome of checking one budget row against the owner's recorded expenses.
/// Categories match by exact string equality, so duplicate budget rows for the
/// same category each produce their own status.
#[derive(Debug, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub exceeded: bool,
}

use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct Expense {
    pub id: String,
    pub user_id: i64,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: String,
        user_id: i64,
        amount: Decimal,
        category: String,
        description: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id,
            amount,
            category,
            description,
            date,
        }
    }
}

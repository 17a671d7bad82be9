use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct Income {
    pub id: String,
    pub user_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

impl Income {
    pub fn new(id: String, user_id: i64, amount: Decimal, description: String, date: NaiveDate) -> Self {
        Self {
            id,
            user_id,
            amount,
            description,
            date,
        }
    }
}

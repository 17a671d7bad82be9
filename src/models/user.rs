#[derive(Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
}

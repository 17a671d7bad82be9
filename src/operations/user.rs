use crate::db::user_repository;
use crate::models::user::User;
use rusqlite::Connection;

pub fn register_user_db(conn: &Connection, username: &str) -> Result<i64, String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    user_repository::add_user(conn, username.trim())
}

pub fn list_users_db(conn: &Connection) -> Result<Vec<User>, String> {
    user_repository::get_all_users(conn)
}

pub fn find_user_db(conn: &Connection, username: &str) -> Result<User, String> {
    user_repository::find_user_by_name(conn, username)?
        .ok_or_else(|| format!("User '{}' not found", username))
}

use crate::models::user::User;
use rusqlite::Connection;

pub fn add_user(conn: &Connection, username: &str) -> Result<i64, String> {
    conn.execute("INSERT INTO users (username) VALUES (?1)", [username])
        .map_err(|e| format!("Failed to insert user: {}", e))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_all_users(conn: &Connection) -> Result<Vec<User>, String> {
    let mut stmt = conn
        .prepare("SELECT id, username FROM users ORDER BY id ASC")
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let user_iter = stmt
        .query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
            })
        })
        .map_err(|e| format!("Failed to query users: {}", e))?;

    let mut users = Vec::new();
    for user in user_iter {
        users.push(user.map_err(|e| format!("Failed to parse user: {}", e))?);
    }
    Ok(users)
}

pub fn find_user_by_name(conn: &Connection, username: &str) -> Result<Option<User>, String> {
    let mut stmt = conn
        .prepare("SELECT id, username FROM users WHERE username = ?1 ORDER BY id ASC")
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let mut rows = stmt
        .query([username])
        .map_err(|e| format!("Failed to query user: {}", e))?;

    if let Some(row) = rows.next().map_err(|e| format!("Failed to read user: {}", e))? {
        let id: i64 = row.get(0).map_err(|e| format!("Failed to read user id: {}", e))?;
        let username: String = row
            .get(1)
            .map_err(|e| format!("Failed to read username: {}", e))?;
        Ok(Some(User { id, username }))
    } else {
        Ok(None)
    }
}

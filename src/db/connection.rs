use rusqlite::{Connection, Result};

pub fn establish_connection() -> Result<Connection> {
    let conn = Connection::open("finance_manager.db")?;
    create_tables(&conn)?;
    Ok(conn)
}

#[cfg(test)]
pub fn establish_test_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS income (
            id TEXT PRIMARY KEY,
            user_id INTEGER NOT NULL,
            amount TEXT NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id TEXT PRIMARY KEY,
            user_id INTEGER NOT NULL,
            amount TEXT NOT NULL,
            category TEXT NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL
        )",
        [],
    )?;
    // No uniqueness on (user_id, category): duplicate budget rows are allowed
    // and each one is checked independently.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS budgets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            category TEXT NOT NULL,
            amount TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

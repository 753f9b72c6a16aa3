use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension, Result};

/// A tracked group as stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Telegram chat ID of the group (externally assigned)
    pub id: i64,
    /// Group title as registered by the operator
    pub title: String,
}

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Create a new database connection pool
///
/// Initializes a connection pool with up to 10 connections and ensures the
/// schema exists.
///
/// # Arguments
///
/// * `database_path` - Path to SQLite database file
///
/// # Returns
///
/// Returns a `DbPool` on success or an `r2d2::Error` if pool creation fails.
pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::file(database_path);
    let pool = Pool::builder()
        .max_size(10) // Maximum 10 connections in the pool
        .build(manager)?;

    let conn = pool.get()?;
    if let Err(e) = init_schema(&conn) {
        log::warn!("Failed to initialize schema: {}", e);
    }

    Ok(pool)
}

/// Get a connection from the pool
///
/// The connection is automatically returned to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Create the registry tables if they are missing.
///
/// Both statements are idempotent, so this is safe to run on every startup.
fn init_schema(conn: &rusqlite::Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS groups (
            group_id INTEGER PRIMARY KEY,
            group_title TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS admins (
            admin_id INTEGER PRIMARY KEY
        );",
    )?;
    Ok(())
}

/// Insert a group or replace the title of an existing one.
///
/// Registering an already-known group ID is not an error: the stored title
/// is overwritten, which keeps re-registration meaningful when a group was
/// renamed on the Telegram side.
pub fn upsert_group(conn: &DbConnection, group_id: i64, group_title: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO groups (group_id, group_title) VALUES (?1, ?2)
         ON CONFLICT(group_id) DO UPDATE SET group_title = excluded.group_title",
        params![group_id, group_title],
    )?;
    Ok(())
}

/// Remove a group from the registry. No-op if the group is absent.
pub fn remove_group(conn: &DbConnection, group_id: i64) -> Result<()> {
    conn.execute("DELETE FROM groups WHERE group_id = ?1", params![group_id])?;
    Ok(())
}

/// All registered groups in insertion order.
///
/// The order is stable within one process run so repeated list renders show
/// buttons in the same positions.
pub fn get_groups(conn: &DbConnection) -> Result<Vec<Group>> {
    let mut stmt = conn.prepare("SELECT group_id, group_title FROM groups ORDER BY rowid")?;
    let rows = stmt.query_map([], |row| {
        Ok(Group {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    })?;

    let mut groups = Vec::new();
    for row in rows {
        groups.push(row?);
    }
    Ok(groups)
}

/// Look up a single group by ID.
pub fn find_group(conn: &DbConnection, group_id: i64) -> Result<Option<Group>> {
    conn.query_row(
        "SELECT group_id, group_title FROM groups WHERE group_id = ?1",
        params![group_id],
        |row| {
            Ok(Group {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        },
    )
    .optional()
}

/// Membership test against the admin set.
pub fn is_admin(conn: &DbConnection, user_id: i64) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM admins WHERE admin_id = ?1", params![user_id], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(found.is_some())
}

/// Add an operator to the admin set. Idempotent.
pub fn add_admin(conn: &DbConnection, user_id: i64) -> Result<()> {
    conn.execute("INSERT OR IGNORE INTO admins (admin_id) VALUES (?1)", params![user_id])?;
    Ok(())
}

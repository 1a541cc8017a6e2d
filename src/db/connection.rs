use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::debug;

/// Schema and seed rows for the channel plan, compiled into the binary. The
/// plan is not configurable at runtime.
pub const BUNDLED_SCHEMA: &str = include_str!("../../assets/channels.sql");

/// Build the in-memory store from the bundled channel plan.
pub fn open_bundled_database() -> Result<Connection> {
    load_database(BUNDLED_SCHEMA).context("failed to load bundled channel plan")
}

/// Open a private in-memory SQLite database and run `script` against it. The
/// connection enables `PRAGMA foreign_keys = ON` first so the `REFERENCES`
/// clauses on `channel` reject dangling frequency ids while seeding.
///
/// The store lives exactly as long as the returned handle; dropping it
/// discards the data.
pub fn load_database(script: &str) -> Result<Connection> {
    let mut conn =
        Connection::open_in_memory().context("failed to open in-memory SQLite database")?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    apply_script(&mut conn, script)?;
    debug!(bytes = script.len(), "channel plan loaded");

    Ok(conn)
}

/// Execute the whole script in one transaction. Any syntax or constraint error
/// drops the transaction, which rolls every statement back.
fn apply_script(conn: &mut Connection, script: &str) -> Result<()> {
    let tx = conn
        .transaction()
        .context("failed to begin schema transaction")?;
    tx.execute_batch(script)
        .context("failed to execute schema script")?;
    tx.commit().context("failed to commit schema transaction")?;
    Ok(())
}

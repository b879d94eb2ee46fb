use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, params};

/// Ordered schema migrations: (version, description, SQL).
///
/// Applied versions are recorded in the `log` table as
/// `operation = 'migration_applied'`, `target = version`.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20251001_0001_create_reservations",
        "Created reservations table",
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            time        TEXT NOT NULL,
            party_size  INTEGER NOT NULL CHECK(party_size > 0),
            name        TEXT NOT NULL,
            email       TEXT,
            phone       TEXT,
            status      TEXT NOT NULL DEFAULT 'confirmed'
                        CHECK(status IN ('confirmed','cancelled')),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reservations_date_time ON reservations(date, time);
        "#,
    ),
    (
        "20251020_0002_add_reservation_notes",
        "Added notes column to reservations",
        "ALTER TABLE reservations ADD COLUMN notes TEXT;",
    ),
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions not yet applied, in order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            out.push(*version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, each in its own transaction.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            params![version, description],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {version} → {description}"));
        applied += 1;
    }

    Ok(applied)
}

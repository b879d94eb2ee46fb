use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RESERVATIONS BY STATUS
    //
    let (confirmed, cancelled): (i64, i64) = pool.conn.query_row(
        "SELECT
            IFNULL(SUM(status = 'confirmed'), 0),
            IFNULL(SUM(status = 'cancelled'), 0)
         FROM reservations",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Reservations:{} {}{}{} confirmed, {}{}{} cancelled",
        CYAN, RESET, GREEN, confirmed, RESET, GREY, cancelled, RESET
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM reservations",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match range {
        Some((Some(first), Some(last))) => {
            println!("{}• Date range:{} {} → {}", CYAN, RESET, first, last)
        }
        _ => println!("{}• Date range:{} {}none{}", CYAN, RESET, GREY, RESET),
    }

    //
    // 4) LOG SIZE
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}

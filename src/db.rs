// src/db.rs

use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

/// Table statements. Every statement is a no-op when the table already
/// exists, so this runs on every startup.
const TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS pageviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    score INTEGER NOT NULL DEFAULT 0,
    course TEXT NOT NULL,
    day TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
"#;

/// Upgrades a `students` table written without the `day` column.
///
/// Legacy rows carry `created_at` as `YYYY-MM-DD HH:MM:SS`; they are rewritten
/// to the fixed-width format, given their day, and reduced to one row per
/// student, course and day (best score, earliest time) so the unique index
/// below can be built.
const ADD_DAY_COLUMN: &str = r#"
ALTER TABLE students ADD COLUMN day TEXT NOT NULL DEFAULT '';

UPDATE students
SET created_at = strftime('%Y-%m-%dT%H:%M:%fZ', created_at)
WHERE created_at IS NOT NULL AND created_at NOT LIKE '%T%';

UPDATE students SET day = coalesce(substr(created_at, 1, 10), '');

DELETE FROM students
WHERE id IN (
    SELECT id FROM (
        SELECT id, ROW_NUMBER() OVER (
            PARTITION BY name, course, day
            ORDER BY score DESC, created_at ASC, id ASC
        ) AS position
        FROM students
    )
    WHERE position > 1
);
"#;

const INDEXES: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS students_name_course_day
    ON students (name, course, day);

CREATE INDEX IF NOT EXISTS students_course_day
    ON students (course, day);
"#;

/// Opens (creating if needed) the database at `database_url` and applies the schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Creates the `pageviews` and `students` tables if they are missing and
/// upgrades an older `students` table in place.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::raw_sql(TABLES).execute(&mut *tx).await?;

    let has_day: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_table_info('students') WHERE name = 'day'",
    )
    .fetch_one(&mut *tx)
    .await?;

    if has_day == 0 {
        tracing::info!("Adding day column to students table...");
        sqlx::raw_sql(ADD_DAY_COLUMN).execute(&mut *tx).await?;
    }

    sqlx::raw_sql(INDEXES).execute(&mut *tx).await?;

    tx.commit().await?;
    tracing::debug!("Database schema ensured.");
    Ok(())
}

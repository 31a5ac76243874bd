//! v001 -- Initial schema: a single `slots` table.

use rusqlite::Connection;

const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS slots (
    key        TEXT PRIMARY KEY NOT NULL,   -- slot name, e.g. chirpynosh_store_v1
    value      BLOB NOT NULL,               -- serialized aggregate
    updated_at TEXT NOT NULL                -- RFC-3339
);
"#;

pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
